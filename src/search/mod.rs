//! Plan search: eligibility filtering and ranking

mod criteria;
mod engine;

pub use criteria::{
    UserProfile, FilterCriteria, SortKey, CategorySelector,
    DEFAULT_MAX_PREMIUM, DEFAULT_MIN_COVERAGE, PREMIUM_SLIDER, COVERAGE_SLIDER,
};
pub use engine::{filter_and_sort, is_eligible, within_criteria, matches, compare_plans, PlanSearch};
