//! Direct Groq API adapter

use crate::config::FileGroqConfig;
use crate::groq::protocol::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use tracing::{debug, warn};
use viktorina_application::{GatewayError, GenerationRequest, TextGeneration};

/// Environment variable holding the upstream credential
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Read the Groq credential from the process environment.
///
/// A set-but-empty variable counts as absent; absence is not an error
/// here — the gateway reports it per request.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(GROQ_API_KEY_VAR)
        .ok()
        .filter(|key| !key.is_empty())
}

/// [`TextGeneration`] adapter forwarding to the Groq generation endpoint.
///
/// Single-shot forward with fixed sampling parameters: no retries, no
/// timeout handling, no rate limiting. Upstream failures are relayed with
/// their original status and body.
pub struct GroqGateway {
    client: reqwest::Client,
    api_url: String,
    model: String,
    temperature: f64,
    top_p: f64,
    api_key: Option<String>,
}

impl GroqGateway {
    pub fn new(config: &FileGroqConfig, api_key: Option<String>) -> Self {
        if api_key.is_none() {
            warn!(
                "{} is not set; generation requests will fail until it is",
                GROQ_API_KEY_VAR
            );
        }
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            api_key,
        }
    }

    /// Construct with the credential taken from the environment.
    pub fn from_env(config: &FileGroqConfig) -> Self {
        Self::new(config, api_key_from_env())
    }
}

#[async_trait]
impl TextGeneration for GroqGateway {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GatewayError> {
        let Some(api_key) = &self.api_key else {
            return Err(GatewayError::NotConfigured);
        };

        let body = GenerateRequest {
            model: &self.model,
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            n: 1,
            stop: None,
        };

        debug!(
            "Forwarding generation request: {} prompt bytes, max_tokens={}",
            request.prompt.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        Ok(data.first_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_without_touching_the_network() {
        let gateway = GroqGateway::new(&FileGroqConfig::default(), None);
        let error = gateway
            .generate(GenerationRequest::new("x").with_max_tokens(100))
            .await
            .unwrap_err();
        assert!(matches!(error, GatewayError::NotConfigured));
        assert_eq!(error.to_string(), "Groq API key not configured");
    }

    #[test]
    fn test_empty_env_key_counts_as_absent() {
        // SAFETY: test runs single-threaded over this variable
        unsafe {
            std::env::set_var(GROQ_API_KEY_VAR, "");
        }
        assert_eq!(api_key_from_env(), None);
        unsafe {
            std::env::remove_var(GROQ_API_KEY_VAR);
        }
    }
}
