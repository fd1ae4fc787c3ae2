//! CLI entrypoint for viktorina
//!
//! Wires the layers together: configuration, the Groq adapter behind the
//! proxy service, and the proxy client behind the console quiz.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use viktorina_application::{FetchRoundsUseCase, QuizController, SessionLogger};
use viktorina_infrastructure::{ConfigLoader, GroqGateway, JsonlSessionLogger, ProxyClient};
use viktorina_presentation::{Cli, Command, QuizConsole, SpinnerProgress, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or(config.server.bind);
            let gateway = Arc::new(GroqGateway::from_env(&config.groq));

            info!("Starting generation proxy on {}", bind);
            serve(&bind, gateway).await?;
        }
        Command::Play { api_url, session_log } => {
            let api_url = api_url.unwrap_or(config.client.api_url);
            let client = Arc::new(ProxyClient::new(api_url.as_str()));

            let mut fetcher = FetchRoundsUseCase::new(client);
            let log_path = session_log.or_else(|| {
                config
                    .session_log
                    .enabled
                    .then(|| config.session_log.path.clone().into())
            });
            if let Some(path) = log_path
                && let Some(logger) = JsonlSessionLogger::create(&path)
            {
                info!("Writing session log to {}", path.display());
                let logger: Arc<dyn SessionLogger> = Arc::new(logger);
                fetcher = fetcher.with_session_logger(logger);
            }

            let (controller, outcomes) = QuizController::new(fetcher);
            let controller = controller.with_progress(Arc::new(SpinnerProgress::new()));

            info!("Quiz front-end talking to {}", api_url);
            QuizConsole::new(controller, outcomes).run().await?;
        }
    }

    Ok(())
}
