//! Client configuration.
//!
//! Only the backend base URL is meant to be changed in practice; the other
//! knobs exist so tests and embedders can tighten them.
//!
//! Sources, in order of precedence:
//! 1. `LEXPLAIN_*` environment variables (a `.env` file is honoured)
//! 2. a `lexplain.toml` file, when loaded explicitly
//! 3. built-in defaults
//!
//! ```toml
//! api_base_url = "https://legal-api.example.com"
//! request_timeout_secs = 60
//! search_debounce_ms = 300
//! chat_session_capacity = 32
//! max_upload_bytes = 26214400
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

pub const ENV_API_URL: &str = "LEXPLAIN_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "LEXPLAIN_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Per-document chat transcripts kept in memory before the least
    /// recently used one is evicted.
    #[serde(default = "default_chat_session_capacity")]
    pub chat_session_capacity: usize,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_chat_session_capacity() -> usize {
    32
}

fn default_max_upload_bytes() -> u64 {
    25 * 1024 * 1024
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            search_debounce_ms: default_search_debounce_ms(),
            chat_session_capacity: default_chat_session_capacity(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(std::path::PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {0}: {1}")]
    InvalidEnv(String, String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ClientConfig {
    /// Defaults with a different base URL.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            api_base_url: url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "api_base_url must start with http:// or https:// (got '{}')",
                url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.chat_session_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "chat_session_capacity must be greater than zero".to_string(),
            ));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClientConfig {
    /// Load and validate a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;

        config.validate()?;

        tracing::info!(path = %path.display(), base_url = %config.api_base_url, "loaded client config");
        Ok(config)
    }

    /// Defaults overridden by the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply `LEXPLAIN_*` environment overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnv(ENV_TIMEOUT_SECS.to_string(), raw))?;
        }

        self.validate()?;
        Ok(self)
    }
}
