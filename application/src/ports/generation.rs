//! Text generation port
//!
//! One prompt in, one completion out. Implemented twice in the
//! infrastructure layer: by the Groq adapter (used by the proxy service)
//! and by the proxy client (used by the quiz front-end). Single-shot
//! forward: no retries, no timeout handling, no rate limiting.

use async_trait::async_trait;
use thiserror::Error;

/// Default completion budget when the caller does not specify one.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Errors that can occur while requesting a generation
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The upstream credential is absent from the environment.
    /// The display text is the exact error body the proxy returns.
    #[error("Groq API key not configured")]
    NotConfigured,

    /// Non-success upstream response, relayed with its original status
    /// code and raw body
    #[error("{body}")]
    Upstream { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

/// A single generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Gateway to a text generation backend
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate a completion for the request, returning the raw text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_tokens() {
        let request = GenerationRequest::new("привет");
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_not_configured_matches_proxy_error_body() {
        assert_eq!(
            GatewayError::NotConfigured.to_string(),
            "Groq API key not configured"
        );
    }

    #[test]
    fn test_upstream_error_displays_raw_body() {
        let error = GatewayError::Upstream {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(error.to_string(), "rate limited");
    }
}
