//! Application-level configuration.

use serde::{Deserialize, Serialize};

use super::{MediaResolution, ThinkingLevel};
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Gemini API key. Environment variables take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint root, without the `/v1beta` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used when a request does not name one
    #[serde(default = "default_model")]
    pub default_model: String,
    /// HTTP timeout for one generation call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub default_thinking_level: ThinkingLevel,
    #[serde(default)]
    pub default_media_resolution: MediaResolution,
    /// Also write logs to a daily file in the data directory
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl AppConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_secs: default_timeout_secs(),
            default_thinking_level: ThinkingLevel::default(),
            default_media_resolution: MediaResolution::default(),
            log_to_file: false,
        }
    }

    /// Check values that would otherwise only fail at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                field: "base_url".to_string(),
                message: format!("must start with http:// or https://, got '{}'", self.base_url),
            });
        }
        if self.default_model.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "default_model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                field: "timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// API key if present and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
