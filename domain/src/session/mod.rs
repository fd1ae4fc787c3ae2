//! The quiz state machine
//!
//! [`state::QuizState`] bundles everything the UI flow needs — current
//! step, team setup, loaded rounds, indices, timer and answers — and
//! [`transition::apply`] advances it one [`event::QuizEvent`] at a time.
//! Transitions are pure: the asynchronous fetch lives in the application
//! layer and reports back through `RoundsLoaded` / `LoadFailed`.

pub mod event;
pub mod state;
pub mod transition;

pub use event::QuizEvent;
pub use state::{FetchStatus, QuizState, Step};
pub use transition::apply;
