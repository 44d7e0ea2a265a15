//! Eligibility filtering and ranking over the plan catalog
//!
//! Every predicate is conjunctive, so tightening any input can only shrink the
//! result set. Results are recomputed in full on each change; catalogs are small.

use super::{CategorySelector, FilterCriteria, SortKey, UserProfile};
use crate::catalog::{Catalog, InsurancePlan};
use std::cmp::Ordering;

/// Profile compatibility: age within range, income floor, dependents ceiling
pub fn is_eligible(plan: &InsurancePlan, profile: &UserProfile) -> bool {
    plan.age_range.contains(profile.age)
        && profile.income >= plan.min_income
        && profile.dependents <= plan.max_dependents
}

/// Price/coverage window from the adjustable criteria
pub fn within_criteria(plan: &InsurancePlan, criteria: &FilterCriteria) -> bool {
    plan.premium <= criteria.max_premium && plan.coverage >= criteria.min_coverage
}

/// The full per-plan predicate: category, query, eligibility, and criteria
pub fn matches(
    plan: &InsurancePlan,
    profile: &UserProfile,
    criteria: &FilterCriteria,
    category: CategorySelector,
    query: &str,
) -> bool {
    if !category.accepts(plan.category) {
        return false;
    }
    if !query.is_empty() && !plan.matches_query(query) {
        return false;
    }
    is_eligible(plan, profile) && within_criteria(plan, criteria)
}

/// Comparator for a sort key. Ties compare equal so a stable sort keeps catalog order.
pub fn compare_plans(sort_by: SortKey, a: &InsurancePlan, b: &InsurancePlan) -> Ordering {
    match sort_by {
        SortKey::Recommended => b.recommended.cmp(&a.recommended),
        SortKey::PremiumLow => a.premium.total_cmp(&b.premium),
        SortKey::PremiumHigh => b.premium.total_cmp(&a.premium),
        SortKey::CoverageHigh => b.coverage.total_cmp(&a.coverage),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
    }
}

/// Filter `plans` against every predicate, then order by `criteria.sort_by`.
///
/// The output is a subset of `plans` borrowed in ranked order. An empty result
/// is a valid state, not an error.
pub fn filter_and_sort<'a>(
    plans: &'a [InsurancePlan],
    profile: &UserProfile,
    criteria: &FilterCriteria,
    category: CategorySelector,
    query: &str,
) -> Vec<&'a InsurancePlan> {
    let mut filtered: Vec<&InsurancePlan> = plans
        .iter()
        .filter(|plan| matches(plan, profile, criteria, category, query))
        .collect();

    // slice::sort_by is stable
    filtered.sort_by(|a, b| compare_plans(criteria.sort_by, a, b));

    log::debug!(
        "filter: {} of {} plans match (category={}, query={:?}, sort={})",
        filtered.len(),
        plans.len(),
        category,
        query,
        criteria.sort_by
    );

    filtered
}

/// Interactive search session over a catalog.
///
/// The profile is fixed; criteria, category, and query are adjustable and every
/// change recomputes the ranked results.
#[derive(Debug, Clone)]
pub struct PlanSearch {
    catalog: Catalog,
    profile: UserProfile,
    criteria: FilterCriteria,
    category: CategorySelector,
    query: String,
    /// Plan ids in ranked order
    results: Vec<u32>,
}

impl PlanSearch {
    pub fn new(catalog: Catalog, profile: UserProfile) -> Self {
        Self::with_criteria(catalog, profile, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: Catalog, profile: UserProfile, criteria: FilterCriteria) -> Self {
        let mut search = Self {
            catalog,
            profile,
            criteria,
            category: CategorySelector::All,
            query: String::new(),
            results: Vec::new(),
        };
        search.recompute();
        search
    }

    fn recompute(&mut self) {
        self.results = filter_and_sort(
            self.catalog.plans(),
            &self.profile,
            &self.criteria,
            self.category,
            &self.query,
        )
        .into_iter()
        .map(|plan| plan.id)
        .collect();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn set_max_premium(&mut self, max_premium: f64) {
        self.criteria.max_premium = max_premium;
        self.recompute();
    }

    pub fn set_min_coverage(&mut self, min_coverage: f64) {
        self.criteria.min_coverage = min_coverage;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort_by: SortKey) {
        self.criteria.sort_by = sort_by;
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategorySelector) {
        self.category = category;
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// One-step reset used by the "no results" state: default criteria, all
    /// categories, empty query
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.category = CategorySelector::All;
        self.query.clear();
        self.recompute();
    }

    pub fn results(&self) -> Vec<&InsurancePlan> {
        self.results
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn category(&self) -> CategorySelector {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
