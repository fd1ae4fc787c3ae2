//! Progress notification port
//!
//! Lets the presentation layer show a loading indicator while the fetch
//! task is in flight without the controller knowing how it is rendered.

/// Callbacks around the quiz fetch lifecycle
pub trait QuizProgress: Send + Sync {
    /// A fetch task was spawned
    fn fetch_started(&self) {}

    /// The fetch produced rounds
    fn fetch_finished(&self) {}

    /// The fetch failed; `message` is the internal error detail
    fn fetch_failed(&self, _message: &str) {}
}

/// No-op progress sink, the default
pub struct NoProgress;

impl QuizProgress for NoProgress {}
