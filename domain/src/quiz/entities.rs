//! Round and question entities
//!
//! These mirror the wire form produced by the generation API: a JSON array
//! of rounds, camelCase field names. Rounds are immutable once parsed.

use serde::{Deserialize, Serialize};

/// Fallback time per question when neither the question nor the round
/// carries a limit.
pub const DEFAULT_QUESTION_SECONDS: u32 = 30;

/// A single quiz question.
///
/// `correct_answer` is carried through from the generated content but is
/// never compared against the recorded answers; results report completion
/// counts only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    /// Per-question override of the round's time limit, seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

/// One round of the quiz: a titled, ordered sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Default time per question, seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_per_question: Option<u32>,
    /// Overall budget for long tasks, seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<u32>,
}

impl Round {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Seconds on the clock for the question at `index`.
    ///
    /// Resolution order: the question's own `time_limit`, the round's
    /// `time_per_question`, then [`DEFAULT_QUESTION_SECONDS`]. A zero value
    /// counts as absent, matching the source behavior.
    pub fn question_seconds(&self, index: usize) -> u32 {
        self.questions
            .get(index)
            .and_then(|q| q.time_limit.filter(|&t| t > 0))
            .or(self.time_per_question.filter(|&t| t > 0))
            .unwrap_or(DEFAULT_QUESTION_SECONDS)
    }
}
