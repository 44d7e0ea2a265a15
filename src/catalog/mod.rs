//! Plan catalog: static reference data and CSV loading

mod plan;
mod store;
mod pools;
pub mod loader;

pub use plan::{Category, AgeRange, InsurancePlan};
pub use store::Catalog;
pub use pools::{CommunityPool, PoolStats, pool_stats};
pub use loader::{load_catalog, load_catalog_from_reader};
