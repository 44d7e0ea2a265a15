//! Weighted-sum risk score and tier thresholds
//!
//! Only age, lifestyle, and smoking contribute. Medical history and
//! occupation risk are collected but not scored.

use super::questionnaire::{QuestionId, QuestionnaireResponse};
use serde::Serialize;

/// Upper bound of the score scale
pub const MAX_SCORE: u32 = 100;

/// Scores below this are low risk
pub const MODERATE_THRESHOLD: u8 = 30;
/// Scores at or above this are high risk
pub const HIGH_THRESHOLD: u8 = 60;

/// Points per age bracket, youngest to oldest
const AGE_POINTS: [(&str, u32); 5] = [
    ("18-25", 10),
    ("26-35", 20),
    ("36-45", 30),
    ("46-55", 40),
    ("55+", 50),
];

const LIFESTYLE_POINTS: [(&str, u32); 3] = [
    ("sedentary", 30),
    ("moderatelyActive", 15),
    ("veryActive", 5),
];

const SMOKING_POINTS: [(&str, u32); 3] = [
    ("never", 0),
    ("occasionally", 15),
    ("regularly", 30),
];

/// Points for a single-select answer; unanswered or unrecognized labels score 0
fn factor_points(responses: &QuestionnaireResponse, id: QuestionId, table: &[(&str, u32)]) -> u32 {
    responses
        .single(id)
        .and_then(|label| id.question().resolve(label))
        .and_then(|option| table.iter().find(|(key, _)| *key == option.key))
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// A score on the 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Clamp a raw points total onto the scale
    pub fn clamped(raw: u32) -> Self {
        RiskScore(raw.min(MAX_SCORE) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_score(score: RiskScore) -> Self {
        match score.value() {
            s if s < MODERATE_THRESHOLD => RiskTier::Low,
            s if s < HIGH_THRESHOLD => RiskTier::Moderate,
            _ => RiskTier::High,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            RiskTier::Low => "lowRisk",
            RiskTier::Moderate => "moderateRisk",
            RiskTier::High => "highRisk",
        }
    }

    /// The one recommendation shown for this tier
    pub fn recommendation_key(&self) -> &'static str {
        match self {
            RiskTier::Low => "lowRiskRecommendation",
            RiskTier::Moderate => "moderateRiskRecommendation",
            RiskTier::High => "highRiskRecommendation",
        }
    }
}

/// Per-factor contributions before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RiskFactorBreakdown {
    pub age: u32,
    pub lifestyle: u32,
    pub smoking: u32,
}

impl RiskFactorBreakdown {
    pub fn from_responses(responses: &QuestionnaireResponse) -> Self {
        Self {
            age: factor_points(responses, QuestionId::Age, &AGE_POINTS),
            lifestyle: factor_points(responses, QuestionId::Lifestyle, &LIFESTYLE_POINTS),
            smoking: factor_points(responses, QuestionId::Smoking, &SMOKING_POINTS),
        }
    }

    /// Unclamped sum of all contributions
    pub fn raw_total(&self) -> u32 {
        self.age + self.lifestyle + self.smoking
    }

    pub fn score(&self) -> RiskScore {
        RiskScore::clamped(self.raw_total())
    }

    /// Scored factors in question order, for charting
    pub fn factors(&self) -> [(QuestionId, u32); 3] {
        [
            (QuestionId::Age, self.age),
            (QuestionId::Lifestyle, self.lifestyle),
            (QuestionId::Smoking, self.smoking),
        ]
    }
}

/// Score a response set. Pure: the same responses always give the same score.
pub fn score(responses: &QuestionnaireResponse) -> RiskScore {
    RiskFactorBreakdown::from_responses(responses).score()
}

/// Everything the results screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub score: RiskScore,
    pub tier: RiskTier,
    pub breakdown: RiskFactorBreakdown,
}

pub fn assess(responses: &QuestionnaireResponse) -> Assessment {
    let breakdown = RiskFactorBreakdown::from_responses(responses);
    let score = breakdown.score();
    Assessment {
        score,
        tier: score.tier(),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_young_active_non_smoker_is_low_risk() {
        let responses = QuestionnaireResponse::new()
            .with(QuestionId::Age, "18-25")
            .with(QuestionId::Lifestyle, "very active")
            .with(QuestionId::Smoking, "never");

        let s = score(&responses);
        assert_eq!(s.value(), 15);
        assert_eq!(s.tier(), RiskTier::Low);
    }

    #[test]
    fn test_total_is_clamped_to_100() {
        let responses = QuestionnaireResponse::new()
            .with(QuestionId::Age, "55+")
            .with(QuestionId::Lifestyle, "sedentary")
            .with(QuestionId::Smoking, "regularly");

        let breakdown = RiskFactorBreakdown::from_responses(&responses);
        assert_eq!(breakdown.raw_total(), 110);
        assert_eq!(breakdown.score().value(), 100);
        assert_eq!(breakdown.score().tier(), RiskTier::High);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RiskScore::clamped(0).tier(), RiskTier::Low);
        assert_eq!(RiskScore::clamped(29).tier(), RiskTier::Low);
        assert_eq!(RiskScore::clamped(30).tier(), RiskTier::Moderate);
        assert_eq!(RiskScore::clamped(59).tier(), RiskTier::Moderate);
        assert_eq!(RiskScore::clamped(60).tier(), RiskTier::High);
        assert_eq!(RiskScore::clamped(500).value(), 100);
    }

    #[test]
    fn test_medical_and_occupation_do_not_score() {
        let base = QuestionnaireResponse::new()
            .with(QuestionId::Age, "36-45")
            .with(QuestionId::Lifestyle, "Moderately Active")
            .with(QuestionId::Smoking, "occasionally");
        let loaded = base
            .clone()
            .with_many(QuestionId::Medical, ["diabetes", "heartDisease"])
            .with(QuestionId::Occupation, "highRisk");

        assert_eq!(score(&base).value(), 60);
        assert_eq!(score(&base), score(&loaded));
    }

    #[test]
    fn test_missing_and_unknown_answers_score_zero() {
        assert_eq!(score(&QuestionnaireResponse::new()).value(), 0);

        let responses = QuestionnaireResponse::new()
            .with(QuestionId::Age, "99-100")
            .with(QuestionId::Smoking, "regularly");
        let breakdown = RiskFactorBreakdown::from_responses(&responses);
        assert_eq!(breakdown.age, 0);
        assert_eq!(breakdown.smoking, 30);
    }

    #[test]
    fn test_assessment_carries_recommendation() {
        let responses = QuestionnaireResponse::new()
            .with(QuestionId::Age, "26-35")
            .with(QuestionId::Lifestyle, "moderatelyActive")
            .with(QuestionId::Smoking, "never");
        let assessment = assess(&responses);
        assert_eq!(assessment.score.value(), 35);
        assert_eq!(assessment.tier, RiskTier::Moderate);
        assert_eq!(assessment.tier.recommendation_key(), "moderateRiskRecommendation");
        assert_eq!(
            assessment.breakdown.factors(),
            [(QuestionId::Age, 20), (QuestionId::Lifestyle, 15), (QuestionId::Smoking, 0)]
        );
    }
}
