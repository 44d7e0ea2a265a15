//! The fixed five-question lifestyle questionnaire and its answer state

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::scoring::{assess, Assessment};

/// Question identifiers, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Age,
    Lifestyle,
    Smoking,
    Medical,
    Occupation,
}

impl QuestionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Age => "age",
            QuestionId::Lifestyle => "lifestyle",
            QuestionId::Smoking => "smoking",
            QuestionId::Medical => "medical",
            QuestionId::Occupation => "occupation",
        }
    }

    pub fn question(&self) -> &'static Question {
        // QUESTIONS is declared in QuestionId order
        &QUESTIONS[*self as usize]
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one option
    Single,
    /// Any subset of options
    Multiple,
}

/// An answer option: canonical key plus English display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub key: &'static str,
    pub text: &'static str,
}

const fn opt(key: &'static str, text: &'static str) -> AnswerOption {
    AnswerOption { key, text }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    /// Translation key for the prompt
    pub prompt_key: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Resolve a label against this question's options.
    ///
    /// Matching ignores case, spaces, and punctuation, and accepts either the
    /// option key or its display text ("very active", "Very Active", "veryActive").
    pub fn resolve(&self, label: &str) -> Option<&'static AnswerOption> {
        let wanted = normalize_label(label);
        if wanted.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|o| normalize_label(o.key) == wanted || normalize_label(o.text) == wanted)
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '+')
        .flat_map(char::to_lowercase)
        .collect()
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        id: QuestionId::Age,
        prompt_key: "whatIsYourAge",
        kind: QuestionKind::Single,
        options: &[
            opt("18-25", "18-25"),
            opt("26-35", "26-35"),
            opt("36-45", "36-45"),
            opt("46-55", "46-55"),
            opt("55+", "55+"),
        ],
    },
    Question {
        id: QuestionId::Lifestyle,
        prompt_key: "describeLifestyle",
        kind: QuestionKind::Single,
        options: &[
            opt("sedentary", "Mostly Sedentary"),
            opt("moderatelyActive", "Moderately Active"),
            opt("veryActive", "Very Active"),
        ],
    },
    Question {
        id: QuestionId::Smoking,
        prompt_key: "smokingHabit",
        kind: QuestionKind::Single,
        options: &[
            opt("never", "Never"),
            opt("occasionally", "Occasionally"),
            opt("regularly", "Regularly"),
        ],
    },
    Question {
        id: QuestionId::Medical,
        prompt_key: "medicalHistory",
        kind: QuestionKind::Multiple,
        options: &[
            opt("diabetes", "Diabetes"),
            opt("heartDisease", "Heart Disease"),
            opt("hypertension", "Hypertension"),
            opt("none", "None"),
        ],
    },
    Question {
        id: QuestionId::Occupation,
        prompt_key: "occupationRisk",
        kind: QuestionKind::Single,
        options: &[
            opt("lowRisk", "Low Risk"),
            opt("mediumRisk", "Medium Risk"),
            opt("highRisk", "High Risk"),
        ],
    },
];

/// A recorded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(BTreeSet<String>),
}

impl Answer {
    /// An empty multi-select counts as unanswered
    pub fn is_present(&self) -> bool {
        match self {
            Answer::Single(label) => !label.trim().is_empty(),
            Answer::Multiple(labels) => !labels.is_empty(),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Answer::Single(label) => Some(label),
            Answer::Multiple(_) => None,
        }
    }
}

/// Answers keyed by question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    answers: BTreeMap<QuestionId, Answer>,
}

impl QuestionnaireResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style single answer
    pub fn with(mut self, id: QuestionId, label: impl Into<String>) -> Self {
        self.answers.insert(id, Answer::Single(label.into()));
        self
    }

    /// Builder-style multi-select answer
    pub fn with_many<I, S>(mut self, id: QuestionId, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers
            .insert(id, Answer::Multiple(labels.into_iter().map(Into::into).collect()));
        self
    }

    pub fn set(&mut self, id: QuestionId, answer: Answer) {
        self.answers.insert(id, answer);
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    pub fn single(&self, id: QuestionId) -> Option<&str> {
        self.get(id).and_then(Answer::as_single)
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.get(id).is_some_and(Answer::is_present)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Result of a "next" action
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Moved to the given 0-based step
    Advanced(usize),
    /// The current question has no answer yet
    Blocked,
    /// Last question answered; results computed
    Completed(Assessment),
}

/// Step-by-step questionnaire session.
///
/// Forward moves require an answer to the current question; backward moves are
/// free and keep earlier answers. Retake clears everything.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    step: usize,
    responses: QuestionnaireResponse,
    results: Option<Assessment>,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions() -> &'static [Question] {
        &QUESTIONS
    }

    pub fn current(&self) -> &'static Question {
        &QUESTIONS[self.step]
    }

    /// 0-based step index
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        QUESTIONS.len()
    }

    /// Progress through the questionnaire, counting the current question
    pub fn progress_percent(&self) -> u32 {
        (((self.step + 1) as f64 / QUESTIONS.len() as f64) * 100.0).round() as u32
    }

    pub fn responses(&self) -> &QuestionnaireResponse {
        &self.responses
    }

    pub fn results(&self) -> Option<&Assessment> {
        self.results.as_ref()
    }

    /// Choose an option on a single-select question. Returns false if the label
    /// is not one of the current question's options.
    pub fn select(&mut self, label: &str) -> bool {
        let question = self.current();
        if question.kind != QuestionKind::Single {
            return false;
        }
        match question.resolve(label) {
            Some(option) => {
                self.responses
                    .set(question.id, Answer::Single(option.key.to_string()));
                true
            }
            None => false,
        }
    }

    /// Check or uncheck an option on a multi-select question
    pub fn toggle(&mut self, label: &str) -> bool {
        let question = self.current();
        if question.kind != QuestionKind::Multiple {
            return false;
        }
        let Some(option) = question.resolve(label) else {
            return false;
        };

        let mut selected = match self.responses.get(question.id) {
            Some(Answer::Multiple(labels)) => labels.clone(),
            _ => BTreeSet::new(),
        };
        if !selected.remove(option.key) {
            selected.insert(option.key.to_string());
        }
        self.responses.set(question.id, Answer::Multiple(selected));
        true
    }

    pub fn can_advance(&self) -> bool {
        self.responses.is_answered(self.current().id)
    }

    pub fn next(&mut self) -> StepOutcome {
        if !self.can_advance() {
            return StepOutcome::Blocked;
        }
        if self.step + 1 < QUESTIONS.len() {
            self.step += 1;
            return StepOutcome::Advanced(self.step);
        }

        let assessment = assess(&self.responses);
        log::debug!(
            "questionnaire completed: score={} tier={:?}",
            assessment.score.value(),
            assessment.tier
        );
        self.results = Some(assessment.clone());
        StepOutcome::Completed(assessment)
    }

    /// Step back one question; no-op on the first question
    pub fn previous(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Clear all responses and restart at question one
    pub fn retake(&mut self) {
        self.step = 0;
        self.responses.clear();
        self.results = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskTier;

    #[test]
    fn test_questions_are_in_id_order() {
        for (i, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(question.id as usize, i);
            assert_eq!(question.id.question(), question);
        }
    }

    #[test]
    fn test_resolve_accepts_key_or_text() {
        let lifestyle = QuestionId::Lifestyle.question();
        assert_eq!(lifestyle.resolve("very active").map(|o| o.key), Some("veryActive"));
        assert_eq!(lifestyle.resolve("Very Active").map(|o| o.key), Some("veryActive"));
        assert_eq!(lifestyle.resolve("veryActive").map(|o| o.key), Some("veryActive"));
        assert_eq!(lifestyle.resolve("Mostly Sedentary").map(|o| o.key), Some("sedentary"));
        assert!(lifestyle.resolve("couch").is_none());
        assert!(lifestyle.resolve("").is_none());

        let age = QuestionId::Age.question();
        assert_eq!(age.resolve("55+").map(|o| o.key), Some("55+"));
        assert_eq!(age.resolve("18-25").map(|o| o.key), Some("18-25"));
    }

    #[test]
    fn test_next_is_blocked_until_answered() {
        let mut quiz = Questionnaire::new();
        assert!(!quiz.can_advance());
        assert_eq!(quiz.next(), StepOutcome::Blocked);
        assert_eq!(quiz.step(), 0);

        assert!(quiz.select("26-35"));
        assert_eq!(quiz.next(), StepOutcome::Advanced(1));
        assert_eq!(quiz.progress_percent(), 40);
    }

    #[test]
    fn test_previous_keeps_answers() {
        let mut quiz = Questionnaire::new();
        quiz.select("18-25");
        quiz.next();
        quiz.select("Very Active");
        quiz.next();

        quiz.previous();
        quiz.previous();
        quiz.previous();
        assert_eq!(quiz.step(), 0);
        assert_eq!(quiz.responses().single(QuestionId::Age), Some("18-25"));
        assert_eq!(quiz.responses().single(QuestionId::Lifestyle), Some("veryActive"));
        assert!(quiz.can_advance());
    }

    #[test]
    fn test_multi_select_toggle() {
        let mut quiz = Questionnaire::new();
        for label in ["18-25", "moderately active", "never"] {
            assert!(quiz.select(label));
            quiz.next();
        }
        assert_eq!(quiz.current().id, QuestionId::Medical);
        assert!(!quiz.select("diabetes"));

        assert!(quiz.toggle("Diabetes"));
        assert!(quiz.toggle("hypertension"));
        assert!(quiz.can_advance());

        quiz.toggle("diabetes");
        quiz.toggle("hypertension");
        // Emptied selection is unanswered again
        assert!(!quiz.can_advance());
        assert_eq!(quiz.next(), StepOutcome::Blocked);
    }

    #[test]
    fn test_full_run_and_retake() {
        let mut quiz = Questionnaire::new();
        quiz.select("55+");
        quiz.next();
        quiz.select("sedentary");
        quiz.next();
        quiz.select("regularly");
        quiz.next();
        quiz.toggle("heart disease");
        quiz.next();
        quiz.select("high risk");

        match quiz.next() {
            StepOutcome::Completed(assessment) => {
                assert_eq!(assessment.score.value(), 100);
                assert_eq!(assessment.tier, RiskTier::High);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(quiz.results().is_some());

        quiz.retake();
        assert_eq!(quiz.step(), 0);
        assert!(quiz.responses().is_empty());
        assert!(quiz.results().is_none());
    }
}
