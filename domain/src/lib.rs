//! Domain layer for viktorina
//!
//! This crate contains the quiz data model, the quiz state machine and the
//! prompt templates. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz run
//!
//! A quiz run owns an ordered sequence of [`Round`]s, each round an ordered
//! sequence of [`Question`]s. Rounds are produced wholesale by parsing the
//! text returned from the generation API and are immutable once adopted.
//!
//! ## State machine
//!
//! The whole UI flow (welcome → team setup → quiz → results) is a single
//! [`QuizState`] advanced by pure transitions:
//! `apply(state, event) → state`. Nothing in this crate performs I/O; the
//! asynchronous fetch lives in the application layer and feeds its outcome
//! back in as [`QuizEvent::RoundsLoaded`] / [`QuizEvent::LoadFailed`].

pub mod core;
pub mod prompt;
pub mod quiz;
pub mod session;

// Re-export commonly used types
pub use crate::core::{error::DomainError, grade::ClassGrade, topic::Topic};
pub use prompt::{PromptTemplate, QUIZ_MAX_TOKENS};
pub use quiz::{
    answers::AnswerSheet,
    entities::{DEFAULT_QUESTION_SECONDS, Question, Round},
    parsing::{ParseError, parse_rounds},
    results::{RoundResult, round_results},
    team::TeamSetup,
};
pub use session::{
    event::QuizEvent,
    state::{FetchStatus, QuizState, Step},
    transition::apply,
};
