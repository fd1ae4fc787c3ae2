//! `POST /api/groq` handler
//!
//! Pass-through contract: `{ prompt, max_tokens? }` in, `{ result }` out
//! on success; `{ error }` with the upstream status (or 500 for local
//! failures) otherwise. The handler adds nothing — no retries, no
//! timeout, no rate limiting.

use crate::http::server::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;
use viktorina_application::{DEFAULT_MAX_TOKENS, GatewayError, GenerationRequest};

/// Request body of the proxy endpoint
#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub prompt: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

#[derive(Debug, Serialize)]
struct ResultReply {
    result: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct ErrorReply {
    error: String,
}

/// Forward one generation request through the gateway.
pub async fn generate(State(state): State<AppState>, Json(body): Json<GenerateBody>) -> Response {
    let request = GenerationRequest::new(body.prompt).with_max_tokens(body.max_tokens);

    match state.gateway.generate(request).await {
        Ok(result) => (StatusCode::OK, Json(ResultReply { result })).into_response(),
        Err(error) => {
            warn!("Generation request failed: {}", error);
            let (status, reply) = error_reply(error);
            (status, Json(reply)).into_response()
        }
    }
}

/// Map a gateway error onto the proxy's error contract: upstream errors
/// keep their status code and raw body, everything local is a 500 with
/// the error's message.
fn error_reply(error: GatewayError) -> (StatusCode, ErrorReply) {
    let status = match &error {
        GatewayError::Upstream { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match error {
        GatewayError::Upstream { body, .. } => body,
        other => other.to_string(),
    };
    (status, ErrorReply { error: message })
}
