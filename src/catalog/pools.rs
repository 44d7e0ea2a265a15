//! Community insurance pools: group-negotiated plans for a shared segment

use serde::Serialize;

/// A community pool offering a discounted group premium
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityPool {
    pub id: u32,
    /// Translation key for the pool name
    pub name_key: &'static str,
    /// Translation key for the pool description
    pub description_key: &'static str,
    /// Membership segment (e.g. "Professional", "Agriculture")
    pub segment: &'static str,
    pub members: u32,
    /// Group premium per year
    pub premium: f64,
    /// Individual premium the group rate replaces
    pub original_premium: f64,
    pub coverage: f64,
    /// Translation keys for the benefit bullets
    pub benefit_keys: Vec<&'static str>,
}

impl CommunityPool {
    /// The three sample pools
    pub fn builtin() -> Vec<CommunityPool> {
        vec![
            CommunityPool {
                id: 1,
                name_key: "techWorkersPool",
                description_key: "techWorkersDescription",
                segment: "Professional",
                members: 2847,
                premium: 8_450.0,
                original_premium: 12_450.0,
                coverage: 1_500_000.0,
                benefit_keys: vec![
                    "groupNegotiatedRates",
                    "tailoredCoverage",
                    "fastClaimProcessing",
                    "preventiveHealthchecks",
                ],
            },
            CommunityPool {
                id: 2,
                name_key: "gigWorkersUnion",
                description_key: "gigWorkersDescription",
                segment: "Gig Economy",
                members: 1523,
                premium: 3_200.0,
                original_premium: 5_500.0,
                coverage: 500_000.0,
                benefit_keys: vec![
                    "flexiblePremiums",
                    "incomeBasedCoverage",
                    "occupationalProtection",
                    "communitySupport",
                ],
            },
            CommunityPool {
                id: 3,
                name_key: "farmersCollective",
                description_key: "farmersDescription",
                segment: "Agriculture",
                members: 3156,
                premium: 2_800.0,
                original_premium: 4_500.0,
                coverage: 300_000.0,
                benefit_keys: vec![
                    "seasonalPayments",
                    "cropInsuranceBundle",
                    "ruralHealthcare",
                    "weatherProtection",
                ],
            },
        ]
    }

    /// Whole-percent discount versus the individual premium
    pub fn savings_percent(&self) -> u32 {
        if self.original_premium <= 0.0 || self.premium >= self.original_premium {
            return 0;
        }
        ((self.original_premium - self.premium) / self.original_premium * 100.0).round() as u32
    }

    /// Absolute yearly saving per member
    pub fn annual_saving(&self) -> f64 {
        (self.original_premium - self.premium).max(0.0)
    }
}

/// Aggregates shown above the pool list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoolStats {
    pub total_members: u32,
    pub average_savings_percent: f64,
    pub average_annual_saving: f64,
}

pub fn pool_stats(pools: &[CommunityPool]) -> PoolStats {
    if pools.is_empty() {
        return PoolStats {
            total_members: 0,
            average_savings_percent: 0.0,
            average_annual_saving: 0.0,
        };
    }

    let n = pools.len() as f64;
    PoolStats {
        total_members: pools.iter().map(|p| p.members).sum(),
        average_savings_percent: pools.iter().map(|p| p.savings_percent() as f64).sum::<f64>() / n,
        average_annual_saving: pools.iter().map(|p| p.annual_saving()).sum::<f64>() / n,
    }
}
