//! Infrastructure layer for viktorina
//!
//! Adapters behind the application ports: the Groq HTTP adapter used by
//! the proxy service, the proxy client used by the quiz front-end, file
//! configuration loading and the JSONL session logger.

pub mod config;
pub mod groq;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileGroqConfig};
pub use groq::{GROQ_API_KEY_VAR, GroqGateway, ProxyClient, api_key_from_env};
pub use logging::JsonlSessionLogger;
