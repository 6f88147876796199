//! Unified error types for LexAssist Core.

use lexassist_types::{ConfigError, GenerationError, TypedError};
use serde::Serialize;
use thiserror::Error;

/// Main error type for all LexAssist operations outside a single generation call.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client could not be built.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generation round trip failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Local key-value store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Features stay locked until the legal disclaimer is accepted.
    #[error("The legal disclaimer has not been accepted yet")]
    DisclaimerNotAccepted,

    /// Feature run with no text, documents or URLs.
    #[error("Nothing to analyse for {0}: provide text, a document or a URL")]
    EmptyInput(String),

    /// Log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    /// The serializable domain error behind this one, if any.
    pub fn typed(&self) -> Option<TypedError> {
        match self {
            Self::Config(e) => Some(TypedError::Config(e.clone())),
            Self::Generation(e) => Some(TypedError::Generation(e.clone())),
            _ => None,
        }
    }

    /// Whether running the same action again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Generation(e) if e.is_retryable())
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for LexAssist operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_keeps_domain_errors() {
        let err = AppError::from(GenerationError::Api { status: 503, message: "overloaded".to_string() });
        let json = serde_json::to_value(err.typed().unwrap()).unwrap();
        assert_eq!(json["domain"], "Generation");
        assert!(err.is_retryable());

        let err = AppError::from(ConfigError::MissingCredential { variable: "GEMINI_API_KEY".to_string() });
        assert!(matches!(err.typed(), Some(TypedError::Config(_))));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_local_errors_have_no_typed_form() {
        assert!(AppError::DisclaimerNotAccepted.typed().is_none());
        assert!(AppError::EmptyInput("NDA triage".to_string()).typed().is_none());
        assert!(!AppError::Generation(GenerationError::Api { status: 400, message: "bad".to_string() }).is_retryable());
    }
}
