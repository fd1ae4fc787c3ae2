//! Events driving the quiz state machine

use crate::core::{ClassGrade, Topic};
use crate::quiz::Round;

/// Everything that can happen to a quiz session.
///
/// User actions, timer ticks and fetch outcomes all arrive through the
/// same channel and are applied by [`crate::session::transition::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// Welcome → team setup
    BeginSetup,
    /// Team setup → welcome
    BackToWelcome,

    // Setup-screen field edits
    SetTeamName(String),
    SetTeamMembers(String),
    SetCurator(String),
    SetGrade(ClassGrade),
    SetTopic(Topic),

    /// The controller accepted a start action and spawned the fetch;
    /// the quiz step opens in its loading substate
    FetchStarted,
    /// Fetch succeeded and the result parsed into rounds
    RoundsLoaded(Vec<Round>),
    /// Fetch or parse failed; the message is the internal error detail
    LoadFailed(String),

    /// Move to the next question / round / results
    Advance,
    /// Move back one question, across round boundaries
    Retreat,
    /// Record an option for the current question
    SelectAnswer(String),
    /// One second elapsed on the question clock
    Tick,

    /// Results → welcome. Team setup and loaded rounds are kept.
    Restart,
}
