//! Fetch rounds use case.
//!
//! Builds the generation prompt from the team setup, sends it through the
//! gateway and parses the returned text into rounds. One start action
//! performs exactly one outbound request.

use crate::ports::generation::{GatewayError, GenerationRequest, TextGeneration};
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use viktorina_domain::{ParseError, PromptTemplate, QUIZ_MAX_TOKENS, Round, TeamSetup, parse_rounds};

/// Errors that can occur while fetching quiz rounds.
#[derive(Error, Debug)]
pub enum FetchRoundsError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Malformed quiz content: {0}")]
    Content(#[from] ParseError),
}

/// Input for the [`FetchRoundsUseCase`]
#[derive(Debug, Clone)]
pub struct FetchRoundsInput {
    pub setup: TeamSetup,
}

impl FetchRoundsInput {
    pub fn new(setup: TeamSetup) -> Self {
        Self { setup }
    }
}

/// Use case for fetching AI-generated quiz rounds
pub struct FetchRoundsUseCase {
    gateway: Arc<dyn TextGeneration>,
    session_logger: Arc<dyn SessionLogger>,
}

impl Clone for FetchRoundsUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            session_logger: self.session_logger.clone(),
        }
    }
}

impl FetchRoundsUseCase {
    pub fn new(gateway: Arc<dyn TextGeneration>) -> Self {
        Self {
            gateway,
            session_logger: Arc::new(NoSessionLogger),
        }
    }

    /// Attach a session logger.
    pub fn with_session_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.session_logger = logger;
        self
    }

    /// Execute one fetch: prompt → gateway → parsed rounds.
    pub async fn execute(&self, input: FetchRoundsInput) -> Result<Vec<Round>, FetchRoundsError> {
        let topic = input.setup.topic;
        let grade = input.setup.class_grade;

        info!("Fetching quiz rounds: topic={}, grade={}", topic, grade);

        let prompt = PromptTemplate::quiz_prompt(topic, grade);
        self.session_logger.log(SessionEvent::new(
            "prompt_sent",
            serde_json::json!({
                "topic": topic.to_string(),
                "grade": grade.as_number(),
                "max_tokens": QUIZ_MAX_TOKENS,
            }),
        ));

        let request = GenerationRequest::new(prompt).with_max_tokens(QUIZ_MAX_TOKENS);
        let text = self.gateway.generate(request).await.inspect_err(|e| {
            self.session_logger.log(SessionEvent::new(
                "fetch_failed",
                serde_json::json!({ "error": e.to_string() }),
            ));
        })?;

        debug!("Generation returned {} bytes", text.len());
        self.session_logger.log(SessionEvent::new(
            "result_received",
            serde_json::json!({ "bytes": text.len() }),
        ));

        let rounds = parse_rounds(&text).inspect_err(|e| {
            self.session_logger.log(SessionEvent::new(
                "parse_failed",
                serde_json::json!({ "error": e.to_string() }),
            ));
        })?;

        info!(
            "Adopted {} rounds, {} questions total",
            rounds.len(),
            rounds.iter().map(|r| r.question_count()).sum::<usize>()
        );
        Ok(rounds)
    }
}
