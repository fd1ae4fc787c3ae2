//! Application layer for viktorina
//!
//! Use cases and ports. The quiz controller owns the session state and the
//! cancellable fetch task; the generation gateway port abstracts over the
//! Groq upstream (server side) and the proxy endpoint (client side), which
//! share one request/response contract.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::generation::{
    DEFAULT_MAX_TOKENS, GatewayError, GenerationRequest, TextGeneration,
};
pub use ports::progress::{NoProgress, QuizProgress};
pub use ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
pub use use_cases::fetch_rounds::{FetchRoundsError, FetchRoundsInput, FetchRoundsUseCase};
pub use use_cases::quiz_controller::{FETCH_ERROR_TEXT, QuizController};
