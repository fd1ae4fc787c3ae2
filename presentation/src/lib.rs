//! Presentation layer for viktorina
//!
//! Two user-facing surfaces: the HTTP generation proxy (`POST /api/groq`)
//! and the interactive console front-end that drives a quiz session
//! through the proxy. CLI argument definitions live here too.

pub mod cli;
pub mod console;
pub mod http;

// Re-export commonly used types
pub use cli::{Cli, Command};
pub use console::{QuizConsole, SpinnerProgress};
pub use http::{AppState, router, serve};
