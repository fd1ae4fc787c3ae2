//! Groq generation adapters
//!
//! Two implementations of the [`TextGeneration`] port share one wire
//! contract:
//!
//! - [`GroqGateway`] talks to the Groq API directly. The proxy service
//!   uses it.
//! - [`ProxyClient`] talks to our own `/api/groq` endpoint. The quiz
//!   front-end uses it, exactly as the original browser client did.
//!
//! [`TextGeneration`]: viktorina_application::TextGeneration

mod gateway;
mod protocol;
mod proxy_client;

pub use gateway::{GROQ_API_KEY_VAR, GroqGateway, api_key_from_env};
pub use protocol::{GenerateRequest, GenerateResponse};
pub use proxy_client::ProxyClient;
