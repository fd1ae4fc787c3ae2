//! Session event logging port
//!
//! Structured, append-only record of what a quiz session did: prompts
//! sent, results received, failures. The JSONL implementation lives in
//! the infrastructure layer; the default sink drops everything.

use serde_json::Value;

/// One loggable session event
#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub kind: String,
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

/// Sink for session events. Logging must never fail the quiz, so the
/// interface is infallible; implementations swallow their own errors.
pub trait SessionLogger: Send + Sync {
    fn log(&self, event: SessionEvent);
}

/// Discards all events
pub struct NoSessionLogger;

impl SessionLogger for NoSessionLogger {
    fn log(&self, _event: SessionEvent) {}
}
