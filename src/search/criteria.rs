//! Search inputs: the fixed user profile and user-adjustable criteria

use crate::catalog::Category;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAX_PREMIUM: f64 = 50_000.0;
pub const DEFAULT_MIN_COVERAGE: f64 = 100_000.0;

/// Premium slider bounds (min, max, step)
pub const PREMIUM_SLIDER: (f64, f64, f64) = (1_000.0, 100_000.0, 1_000.0);
/// Coverage slider bounds (min, max, step)
pub const COVERAGE_SLIDER: (f64, f64, f64) = (100_000.0, 10_000_000.0, 100_000.0);

/// Demographic and financial attributes used for eligibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub age: u8,
    pub dependents: u32,
    /// Monthly income in rupees
    pub income: f64,
    pub occupation: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 28,
            dependents: 2,
            income: 45_000.0,
            occupation: "Software Developer".to_string(),
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Recommended plans first, catalog order otherwise
    #[default]
    #[serde(rename = "recommended")]
    Recommended,
    #[serde(rename = "premium-low")]
    PremiumLow,
    #[serde(rename = "premium-high")]
    PremiumHigh,
    #[serde(rename = "coverage-high")]
    CoverageHigh,
    #[serde(rename = "rating")]
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Recommended,
        SortKey::PremiumLow,
        SortKey::PremiumHigh,
        SortKey::CoverageHigh,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PremiumLow => "premium-low",
            SortKey::PremiumHigh => "premium-high",
            SortKey::CoverageHigh => "coverage-high",
            SortKey::Rating => "rating",
        }
    }

    /// Translation key for the sort dropdown
    pub fn label_key(&self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PremiumLow => "premiumLowToHigh",
            SortKey::PremiumHigh => "premiumHighToLow",
            SortKey::CoverageHigh => "coverageHighToLow",
            SortKey::Rating => "highestRated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| ParseError::SortKey(s.to_string()))
    }
}

/// User-adjustable filter and sort parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Premium ceiling (inclusive)
    pub max_premium: f64,
    /// Coverage floor (inclusive)
    pub min_coverage: f64,
    pub sort_by: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            max_premium: DEFAULT_MAX_PREMIUM,
            min_coverage: DEFAULT_MIN_COVERAGE,
            sort_by: SortKey::Recommended,
        }
    }
}

/// Category tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
}

impl CategorySelector {
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(selected) => *selected == category,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            CategorySelector::All => "allInsurance",
            CategorySelector::Only(category) => category.label_key(),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("all"),
            CategorySelector::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategorySelector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategorySelector::All)
        } else {
            s.parse().map(CategorySelector::Only)
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        CategorySelector::Only(category)
    }
}
