//! Insurance plan records and their closed category set

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line of business a plan belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Life,
    Vehicle,
    Home,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Life,
        Category::Vehicle,
        Category::Home,
    ];

    /// Wire name used in CSV rows and CLI flags
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Life => "life",
            Category::Vehicle => "vehicle",
            Category::Home => "home",
        }
    }

    /// Translation key for the tab label
    pub fn label_key(&self) -> &'static str {
        match self {
            Category::Health => "healthInsurance",
            Category::Life => "lifeInsurance",
            Category::Vehicle => "vehicleInsurance",
            Category::Home => "homeInsurance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "life" => Ok(Category::Life),
            "vehicle" => Ok(Category::Vehicle),
            "home" => Ok(Category::Home),
            _ => Err(ParseError::Category(s.to_string())),
        }
    }
}

/// Inclusive age bounds a plan accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }
}

/// A single plan from the catalog. Reference data: never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePlan {
    /// Unique plan identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Underwriting company
    pub provider: String,

    pub category: Category,

    /// Annual premium in rupees
    pub premium: f64,

    /// Sum insured in rupees
    pub coverage: f64,

    /// Marketing feature bullets, in display order
    pub features: Vec<String>,

    /// Customer rating on a 0-5 scale
    pub rating: f64,

    /// Eligible applicant ages
    pub age_range: AgeRange,

    /// Minimum monthly income to qualify
    pub min_income: f64,

    /// Largest household the plan supports
    pub max_dependents: u32,

    /// Editorial marker, not computed
    pub recommended: bool,
}

impl InsurancePlan {
    /// Check the record-level invariants: positive amounts, rating on 0-5, ordered ages
    pub fn validate(&self) -> Result<(), String> {
        if !(self.premium > 0.0) {
            return Err(format!("premium must be positive, got {}", self.premium));
        }
        if !(self.coverage > 0.0) {
            return Err(format!("coverage must be positive, got {}", self.coverage));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(format!("rating must be within 0-5, got {}", self.rating));
        }
        if self.age_range.min > self.age_range.max {
            return Err(format!(
                "age range [{}, {}] is inverted",
                self.age_range.min, self.age_range.max
            ));
        }
        if !(self.min_income >= 0.0) {
            return Err(format!("minimum income must not be negative, got {}", self.min_income));
        }
        Ok(())
    }

    /// Case-insensitive substring match against name or provider
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.provider.to_lowercase().contains(&needle)
    }
}
