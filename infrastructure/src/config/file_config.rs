//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! The Groq credential is deliberately NOT part of file configuration:
//! it is read from `GROQ_API_KEY` in the process environment, and its
//! absence surfaces as a per-request error from the proxy.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Upstream generation API settings
    pub groq: FileGroqConfig,
    /// Proxy service settings
    pub server: FileServerConfig,
    /// Quiz front-end settings
    pub client: FileClientConfig,
    /// Session log settings
    pub session_log: FileSessionLogConfig,
}

/// `[groq]` — fixed upstream parameters of the generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    pub api_url: String,
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/v1/generate".to_string(),
            model: "meta-llama/llama-4-maverick-17b-128e-instruct".to_string(),
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// `[server]` — where the proxy service listens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// `[client]` — where the quiz front-end sends generation requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    pub api_url: String,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000/api/groq".to_string(),
        }
    }
}

/// `[session_log]` — JSONL record of session events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionLogConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for FileSessionLogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "viktorina.session.jsonl".to_string(),
        }
    }
}
