//! Quiz session controller.
//!
//! Owns the [`QuizState`] and the in-flight fetch task. Synchronous events
//! go straight through the domain transition; a start action additionally
//! spawns the fetch as a cancellable task whose outcome comes back to the
//! driver loop as a regular [`QuizEvent`] over the outcome channel.
//!
//! Double-submission policy: re-triggering a start while a fetch is in
//! flight cancels the previous task — the latest submission wins.

use crate::ports::generation::GatewayError;
use crate::ports::progress::{NoProgress, QuizProgress};
use crate::use_cases::fetch_rounds::{FetchRoundsError, FetchRoundsInput, FetchRoundsUseCase};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use viktorina_domain::{FetchStatus, QuizEvent, QuizState, apply};

/// Fixed user-facing text for fetch failures that carry no upstream
/// error body, matching the source UI.
pub const FETCH_ERROR_TEXT: &str = "Ошибка при загрузке викторины.";

struct InflightFetch {
    cancel: CancellationToken,
    _handle: JoinHandle<()>,
}

/// Controller driving one quiz session.
pub struct QuizController {
    state: QuizState,
    fetcher: FetchRoundsUseCase,
    progress: Arc<dyn QuizProgress>,
    outcome_tx: mpsc::Sender<QuizEvent>,
    inflight: Option<InflightFetch>,
}

impl QuizController {
    /// Create a controller and the receiving end of its outcome channel.
    /// The driver loop must feed received events back via [`Self::apply`].
    pub fn new(fetcher: FetchRoundsUseCase) -> (Self, mpsc::Receiver<QuizEvent>) {
        let (outcome_tx, outcome_rx) = mpsc::channel(8);
        (
            Self {
                state: QuizState::new(),
                fetcher,
                progress: Arc::new(NoProgress),
                outcome_tx,
                inflight: None,
            },
            outcome_rx,
        )
    }

    /// Attach a progress sink for the loading indicator.
    pub fn with_progress(mut self, progress: Arc<dyn QuizProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Apply one event through the pure transition.
    pub fn apply(&mut self, event: QuizEvent) {
        if matches!(event, QuizEvent::RoundsLoaded(_) | QuizEvent::LoadFailed(_)) {
            self.inflight = None;
        }
        self.state = apply(std::mem::take(&mut self.state), event);
    }

    /// Start the quiz: enter the loading substate and spawn the fetch.
    ///
    /// Returns `false` when the current state does not permit a start
    /// (incomplete setup, or questions already on screen). A previous
    /// in-flight fetch is cancelled.
    pub fn start_quiz(&mut self) -> bool {
        let next = apply(self.state.clone(), QuizEvent::FetchStarted);
        if next.fetch != FetchStatus::Loading {
            return false;
        }

        if let Some(previous) = self.inflight.take() {
            debug!("Cancelling previous fetch: a newer submission wins");
            previous.cancel.cancel();
        }

        self.state = next;

        let fetcher = self.fetcher.clone();
        let progress = self.progress.clone();
        let outcome_tx = self.outcome_tx.clone();
        let input = FetchRoundsInput::new(self.state.setup.clone());
        let cancel = CancellationToken::new();
        let child = cancel.clone();

        let handle = tokio::spawn(async move {
            progress.fetch_started();
            tokio::select! {
                _ = child.cancelled() => {
                    debug!("Fetch task cancelled");
                }
                result = fetcher.execute(input) => {
                    let event = match result {
                        Ok(rounds) => {
                            progress.fetch_finished();
                            QuizEvent::RoundsLoaded(rounds)
                        }
                        Err(error) => {
                            progress.fetch_failed(&error.to_string());
                            QuizEvent::LoadFailed(user_facing_message(&error))
                        }
                    };
                    let _ = outcome_tx.send(event).await;
                }
            }
        });

        self.inflight = Some(InflightFetch {
            cancel,
            _handle: handle,
        });
        true
    }

    /// Cancel any in-flight fetch, for teardown.
    pub fn abort_fetch(&mut self) {
        if let Some(inflight) = self.inflight.take() {
            inflight.cancel.cancel();
        }
    }
}

impl Drop for QuizController {
    fn drop(&mut self) {
        self.abort_fetch();
    }
}

/// What the error substate stores: an `{ error }` body from the proxy is
/// shown as-is; everything else (transport, malformed content) collapses
/// into the fixed text, as in the source client.
fn user_facing_message(error: &FetchRoundsError) -> String {
    match error {
        FetchRoundsError::Gateway(GatewayError::Upstream { body, .. }) => body.clone(),
        _ => FETCH_ERROR_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::generation::{GenerationRequest, TextGeneration};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use viktorina_domain::{ClassGrade, Step, Topic};

    const VALID_ROUNDS: &str = r#"[{
        "title": "Раунд",
        "timePerQuestion": 30,
        "questions": [
            {"question": "Вопрос?", "options": ["А", "Б", "В"]}
        ]
    }]"#;

    /// Gateway whose first call hangs until cancelled; later calls
    /// return immediately.
    struct SlowFirstGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGeneration for SlowFirstGateway {
        async fn generate(&self, _request: GenerationRequest) -> Result<String, GatewayError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                futures::future::pending::<()>().await;
            }
            Ok(VALID_ROUNDS.to_string())
        }
    }

    struct FixedGateway(Result<String, &'static str>);

    #[async_trait]
    impl TextGeneration for FixedGateway {
        async fn generate(&self, _request: GenerationRequest) -> Result<String, GatewayError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(body) => Err(GatewayError::Upstream {
                    status: 429,
                    body: body.to_string(),
                }),
            }
        }
    }

    fn ready_controller(
        gateway: Arc<dyn TextGeneration>,
    ) -> (QuizController, mpsc::Receiver<QuizEvent>) {
        let (mut controller, rx) = QuizController::new(FetchRoundsUseCase::new(gateway));
        controller.apply(QuizEvent::BeginSetup);
        controller.apply(QuizEvent::SetTeamName("Атом".to_string()));
        controller.apply(QuizEvent::SetTeamMembers("Иванов".to_string()));
        controller.apply(QuizEvent::SetCurator("Мария Ивановна".to_string()));
        controller.apply(QuizEvent::SetGrade(ClassGrade::Eighth));
        controller.apply(QuizEvent::SetTopic(Topic::Physics));
        (controller, rx)
    }

    #[tokio::test]
    async fn test_incomplete_setup_does_not_start() {
        let gateway = Arc::new(FixedGateway(Ok(VALID_ROUNDS.to_string())));
        let (mut controller, _rx) = QuizController::new(FetchRoundsUseCase::new(gateway));
        controller.apply(QuizEvent::BeginSetup);

        assert!(!controller.start_quiz());
        assert_eq!(controller.state().step, Step::TeamSetup);
        assert_eq!(controller.state().fetch, FetchStatus::Idle);
    }

    #[tokio::test]
    async fn test_successful_fetch_reaches_questions() {
        let gateway = Arc::new(FixedGateway(Ok(VALID_ROUNDS.to_string())));
        let (mut controller, mut rx) = ready_controller(gateway);

        assert!(controller.start_quiz());
        assert_eq!(controller.state().fetch, FetchStatus::Loading);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, QuizEvent::RoundsLoaded(_)));
        controller.apply(event);
        assert!(controller.state().showing_questions());
    }

    #[tokio::test]
    async fn test_upstream_error_body_is_shown_verbatim() {
        let gateway = Arc::new(FixedGateway(Err("rate limited")));
        let (mut controller, mut rx) = ready_controller(gateway);

        controller.start_quiz();
        let event = rx.recv().await.unwrap();
        assert_eq!(event, QuizEvent::LoadFailed("rate limited".to_string()));

        controller.apply(event);
        assert_eq!(controller.state().step, Step::Quiz);
        assert_eq!(
            controller.state().fetch,
            FetchStatus::Failed("rate limited".to_string())
        );
    }

    #[tokio::test]
    async fn test_content_error_collapses_into_fixed_text() {
        let gateway = Arc::new(FixedGateway(Ok("это не JSON".to_string())));
        let (mut controller, mut rx) = ready_controller(gateway);

        controller.start_quiz();
        let event = rx.recv().await.unwrap();
        assert_eq!(event, QuizEvent::LoadFailed(FETCH_ERROR_TEXT.to_string()));
    }

    #[tokio::test]
    async fn test_resubmission_cancels_previous_fetch() {
        let gateway = Arc::new(SlowFirstGateway {
            calls: AtomicUsize::new(0),
        });
        let (mut controller, mut rx) = ready_controller(gateway.clone());

        // First fetch hangs; the second submission cancels it
        assert!(controller.start_quiz());
        assert!(controller.start_quiz());

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, QuizEvent::RoundsLoaded(_)));
        controller.apply(event);

        // Exactly one outcome: the hanging first task was cancelled
        assert!(rx.try_recv().is_err());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }
}
