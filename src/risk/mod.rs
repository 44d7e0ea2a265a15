//! Risk assessment: the questionnaire flow and its scoring formula

mod questionnaire;
mod scoring;

pub use questionnaire::{
    Answer, AnswerOption, Question, QuestionId, QuestionKind, Questionnaire,
    QuestionnaireResponse, StepOutcome, QUESTIONS,
};
pub use scoring::{
    assess, score, Assessment, RiskFactorBreakdown, RiskScore, RiskTier,
    HIGH_THRESHOLD, MAX_SCORE, MODERATE_THRESHOLD,
};
