//! Client-side adapter for the `/api/groq` proxy endpoint
//!
//! Speaks the proxy's own contract: `{ prompt, max_tokens }` in,
//! `{ result }` or `{ error }` out. An `{ error }` body is surfaced as an
//! upstream error so the quiz shows it verbatim, exactly as the original
//! client displayed `data.error`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use viktorina_application::{GatewayError, GenerationRequest, TextGeneration};

#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ProxyReply {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// [`TextGeneration`] adapter posting to a running proxy service
pub struct ProxyClient {
    client: reqwest::Client,
    api_url: String,
}

impl ProxyClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl TextGeneration for ProxyClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GatewayError> {
        let body = ProxyRequest {
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
        };

        debug!("POST {} ({} prompt bytes)", self.api_url, request.prompt.len());

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let reply: ProxyReply = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        if let Some(error) = reply.error {
            return Err(GatewayError::Upstream {
                status,
                body: error,
            });
        }

        reply
            .result
            .ok_or_else(|| GatewayError::MalformedResponse("missing result field".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_request_shape() {
        let request = ProxyRequest {
            prompt: "Создай викторину",
            max_tokens: 1500,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["prompt"], "Создай викторину");
        assert_eq!(value["max_tokens"], 1500);
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_reply_parsing() {
        let reply: ProxyReply = serde_json::from_str(r#"{"result": "[]"}"#).unwrap();
        assert_eq!(reply.result.as_deref(), Some("[]"));
        assert!(reply.error.is_none());

        let reply: ProxyReply = serde_json::from_str(r#"{"error": "rate limited"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("rate limited"));
    }
}
