//! In-memory plan catalog and the built-in sample plans

use super::{AgeRange, Category, InsurancePlan};
use crate::error::CatalogError;
use std::collections::HashSet;

/// Immutable, ordered collection of plans. Catalog order is the tie-break for
/// every sort.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    plans: Vec<InsurancePlan>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid records
    pub fn new(plans: Vec<InsurancePlan>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(plans.len());
        for plan in &plans {
            if !seen.insert(plan.id) {
                return Err(CatalogError::DuplicateId(plan.id));
            }
            plan.validate()
                .map_err(|reason| CatalogError::InvalidPlan { id: plan.id, reason })?;
        }
        Ok(Self { plans })
    }

    /// The nine sample plans shipped with the app
    pub fn builtin() -> Self {
        Self {
            plans: vec![
                plan(1, "Star Health Family Floater", "Star Health", Category::Health,
                     12_450.0, 1_000_000.0,
                     &["Cashless Claims", "Pre/Post Hospitalization", "Day Care", "Maternity"],
                     4.5, (18, 65), 25_000.0, 6, true),
                plan(2, "HDFC ERGO Health Suraksha", "HDFC ERGO", Category::Health,
                     10_800.0, 1_000_000.0,
                     &["Cashless Claims", "Pre/Post Hospitalization", "Day Care"],
                     4.2, (18, 60), 20_000.0, 4, false),
                plan(3, "Max Bupa Health Companion", "Max Bupa", Category::Health,
                     14_200.0, 1_000_000.0,
                     &["Cashless Claims", "Maternity", "Wellness Benefits"],
                     4.3, (21, 65), 30_000.0, 5, false),
                plan(4, "LIC Tech Term", "LIC", Category::Life,
                     8_200.0, 5_000_000.0,
                     &["Pure Term Plan", "Tax Benefits", "Online Claims", "Accidental Death"],
                     4.4, (18, 60), 30_000.0, 10, true),
                plan(5, "HDFC Click 2 Protect Plus", "HDFC Life", Category::Life,
                     9_500.0, 5_000_000.0,
                     &["Term Plan", "Critical Illness", "Waiver of Premium"],
                     4.1, (18, 65), 25_000.0, 8, false),
                plan(6, "Bajaj Allianz Motor Package", "Bajaj Allianz", Category::Vehicle,
                     4_800.0, 500_000.0,
                     &["Zero Depreciation", "Roadside Assistance", "NCB Protection"],
                     4.3, (18, 75), 15_000.0, 10, true),
                plan(7, "ICICI Lombard Car Insurance", "ICICI Lombard", Category::Vehicle,
                     5_200.0, 500_000.0,
                     &["Comprehensive Coverage", "Engine Protection", "Key Replacement"],
                     4.0, (21, 70), 20_000.0, 8, false),
                plan(8, "HDFC ERGO Home Shield", "HDFC ERGO", Category::Home,
                     3_500.0, 2_000_000.0,
                     &["Fire & Allied Perils", "Burglary", "Electronics Cover", "Temporary Accommodation"],
                     4.2, (21, 75), 25_000.0, 10, true),
                plan(9, "Bajaj Allianz Home Insurance", "Bajaj Allianz", Category::Home,
                     4_200.0, 2_500_000.0,
                     &["Comprehensive Coverage", "Natural Disasters", "Jewelry Cover"],
                     4.1, (25, 70), 30_000.0, 8, false),
            ],
        }
    }

    pub fn plans(&self) -> &[InsurancePlan] {
        &self.plans
    }

    pub fn get(&self, id: u32) -> Option<&InsurancePlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Plans in a single category, catalog order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &InsurancePlan> {
        self.plans.iter().filter(move |p| p.category == category)
    }
}

#[allow(clippy::too_many_arguments)]
fn plan(
    id: u32,
    name: &str,
    provider: &str,
    category: Category,
    premium: f64,
    coverage: f64,
    features: &[&str],
    rating: f64,
    ages: (u8, u8),
    min_income: f64,
    max_dependents: u32,
    recommended: bool,
) -> InsurancePlan {
    InsurancePlan {
        id,
        name: name.to_string(),
        provider: provider.to_string(),
        category,
        premium,
        coverage,
        features: features.iter().map(|f| f.to_string()).collect(),
        rating,
        age_range: AgeRange::new(ages.0, ages.1),
        min_income,
        max_dependents,
        recommended,
    }
}
