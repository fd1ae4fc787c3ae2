//! Proxy service wiring

use crate::http::generate::generate;
use axum::Router;
use axum::routing::post;
use std::sync::Arc;
use tracing::info;
use viktorina_application::TextGeneration;

/// Shared state of the proxy service
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn TextGeneration>,
}

/// Build the proxy router: a single `POST /api/groq` route.
pub fn router(gateway: Arc<dyn TextGeneration>) -> Router {
    Router::new()
        .route("/api/groq", post(generate))
        .with_state(AppState { gateway })
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, gateway: Arc<dyn TextGeneration>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Proxy service listening on {}", listener.local_addr()?);
    axum::serve(listener, router(gateway)).await
}
