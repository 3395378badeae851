use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_gemini_timeout")]
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_gemini_endpoint(),
            timeout_seconds: default_gemini_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default = "default_requester")]
    pub requester: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            requester: default_requester(),
            user_agent: default_user_agent(),
            fetch_timeout_seconds: default_fetch_timeout(),
            database_path: default_database_path(),
            history_limit: default_history_limit(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Fills the Gemini key from `GEMINI_API_KEY` when the variable is set and non-empty.
    pub fn apply_env(mut self) -> Self {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                self.gemini.api_key = Some(key);
            }
        }
        self
    }
}

fn default_requester() -> String {
    "local".into()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_database_path() -> String {
    "seo_history.db".into()
}

fn default_history_limit() -> usize {
    10
}

fn default_gemini_endpoint() -> String {
    DEFAULT_GEMINI_ENDPOINT.into()
}

fn default_gemini_timeout() -> u64 {
    30
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Like `load_config`, but a missing file yields the defaults.
pub fn load_config_or_default(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    load_config(path)
}
