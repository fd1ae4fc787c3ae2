//! Results computation
//!
//! A completion count, not a correctness count: the recorded answers are
//! never compared to `correct_answer`.

use crate::quiz::answers::AnswerSheet;
use crate::quiz::entities::Round;
use serde::Serialize;

/// Per-round completion tally shown on the results screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub title: String,
    /// Questions with a recorded answer
    pub answered: usize,
    /// Total questions in the round
    pub total: usize,
}

/// Tally answered slots per round against each round's question count.
pub fn round_results(rounds: &[Round], answers: &AnswerSheet) -> Vec<RoundResult> {
    rounds
        .iter()
        .enumerate()
        .map(|(index, round)| RoundResult {
            title: round.title.clone(),
            answered: answers.answered_in_round(index),
            total: round.question_count(),
        })
        .collect()
}
