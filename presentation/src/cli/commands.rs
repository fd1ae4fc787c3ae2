//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for viktorina
#[derive(Parser, Debug)]
#[command(name = "viktorina")]
#[command(version, about = "AI quiz generator - proxy service and console quiz")]
#[command(long_about = r#"
Viktorina generates timed multi-round quizzes for school teams (grades
7-11) using the Groq text-generation API.

Two subcommands:
  serve   Run the generation proxy service (POST /api/groq). Requires
          GROQ_API_KEY in the environment.
  play    Play a quiz in the console against a running proxy.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./viktorina.toml      Project-level config
3. ~/.config/viktorina/config.toml   Global config

Example:
  GROQ_API_KEY=... viktorina serve
  viktorina play --api-url http://127.0.0.1:3000/api/groq
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the generation proxy service
    Serve {
        /// Listen address, overrides `[server].bind`
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Play a quiz in the console
    Play {
        /// Proxy endpoint URL, overrides `[client].api_url`
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
        /// Write a JSONL session log to this path
        #[arg(long, value_name = "PATH")]
        session_log: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_parses() {
        let cli = Cli::parse_from(["viktorina", "serve", "--bind", "0.0.0.0:8080", "-vv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Serve { bind } => assert_eq!(bind.as_deref(), Some("0.0.0.0:8080")),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_play_defaults() {
        let cli = Cli::parse_from(["viktorina", "play"]);
        match cli.command {
            Command::Play { api_url, session_log } => {
                assert!(api_url.is_none());
                assert!(session_log.is_none());
            }
            _ => panic!("expected play"),
        }
    }
}
