//! Insurance Advisor - plan search, eligibility filtering, and risk assessment
//!
//! This library provides:
//! - A static insurance plan catalog with CSV loading
//! - Profile eligibility filtering and ranked plan search
//! - A five-question lifestyle questionnaire with weighted risk scoring
//! - Locale string lookup with default-locale fallback
//! - Side-by-side plan comparison with injectable share/export collaborators
//! - A simulated assistant chat with delayed replies and notifications

pub mod error;
pub mod config;
pub mod catalog;
pub mod search;
pub mod risk;
pub mod i18n;
pub mod compare;
pub mod assistant;
pub mod view;

// Re-export commonly used types
pub use error::{Error, Result};
pub use config::SessionConfig;
pub use catalog::{Catalog, Category, InsurancePlan};
pub use search::{filter_and_sort, CategorySelector, FilterCriteria, PlanSearch, SortKey, UserProfile};
pub use risk::{score, Questionnaire, QuestionnaireResponse, RiskScore, RiskTier};
pub use i18n::Translator;
pub use compare::Comparison;
pub use view::{Navigator, Screen};
