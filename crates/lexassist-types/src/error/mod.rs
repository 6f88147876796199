//! Typed error definitions for LexAssist.
//!
//! All errors are designed to be:
//!
//! - **Serializable** for handing to a UI layer via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod config;
mod generation;

pub use config::ConfigError;
pub use generation::GenerationError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a generation (request/response) error
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Config(ConfigError::MissingCredential {
            variable: "GEMINI_API_KEY".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Config"));
        assert!(json.contains("GEMINI_API_KEY"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = GenerationError::Api { status: 429, message: "Resource exhausted".to_string() };

        let msg = format!("{}", err);
        assert!(msg.contains("429"));
        assert!(msg.contains("Resource exhausted"));
    }
}
