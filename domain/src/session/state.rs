//! Quiz session state

use crate::quiz::{AnswerSheet, Question, Round, TeamSetup};

/// UI step of the quiz flow.
///
/// Linear forward progression with limited backward navigation:
/// welcome ↔ team setup, within-quiz retreat, results → welcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    TeamSetup,
    Quiz,
    Results,
}

/// Display substate of the `Quiz` step.
///
/// The quiz step renders the union of {loading, error, content}: entering
/// it starts in `Loading`, a failed fetch leaves the step showing the
/// error, and only `Ready` shows questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch has happened yet
    Idle,
    /// Fetch in flight — show the loading indicator
    Loading,
    /// Fetch or parse failed; the message is kept for the log, the UI
    /// shows the fixed error text
    Failed(String),
    /// Rounds adopted, questions on screen
    Ready,
}

/// The complete state bundle of a quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    pub step: Step,
    pub setup: TeamSetup,
    pub rounds: Vec<Round>,
    pub round_index: usize,
    pub question_index: usize,
    /// Seconds left on the current question's clock
    pub time_left: u32,
    pub fetch: FetchStatus,
    pub answers: AnswerSheet,
}

impl QuizState {
    pub fn new() -> Self {
        Self {
            step: Step::Welcome,
            setup: TeamSetup::default(),
            rounds: Vec::new(),
            round_index: 0,
            question_index: 0,
            time_left: 0,
            fetch: FetchStatus::Idle,
            answers: AnswerSheet::empty(),
        }
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.get(self.round_index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_round()?.questions.get(self.question_index)
    }

    /// True at the very first question of the first round, where retreat
    /// is a no-op.
    pub fn at_first_question(&self) -> bool {
        self.round_index == 0 && self.question_index == 0
    }

    /// True while the quiz step is showing questions (not loading/error).
    pub fn showing_questions(&self) -> bool {
        self.step == Step::Quiz && self.fetch == FetchStatus::Ready && !self.rounds.is_empty()
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_welcome() {
        let state = QuizState::new();
        assert_eq!(state.step, Step::Welcome);
        assert_eq!(state.fetch, FetchStatus::Idle);
        assert!(state.rounds.is_empty());
        assert!(state.at_first_question());
        assert!(!state.showing_questions());
    }

    #[test]
    fn test_current_question_is_none_without_rounds() {
        let state = QuizState::new();
        assert!(state.current_round().is_none());
        assert!(state.current_question().is_none());
    }
}
