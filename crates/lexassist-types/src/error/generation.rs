//! Errors raised by a single generation round trip.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to the caller of a generation call.
///
/// Extraction failures, unsupported attachments and bad grounding offsets are
/// recovered locally and never show up here.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GenerationError {
    /// Network failure before a response arrived
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Endpoint answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Endpoint body could not be decoded as a GenerateContent response
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Response carried no candidate text
    #[error("Model returned no text{}", finish_reason.as_ref().map(|r| format!(" (finish reason: {})", r)).unwrap_or_default())]
    EmptyResponse { finish_reason: Option<String> },

    /// Structured output requested but the text was not valid JSON for the schema
    #[error("Structured output failed: {message}")]
    StructuredOutput { message: String },
}

impl GenerationError {
    /// Whether re-invoking the same action may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse { .. } | Self::EmptyResponse { .. } => true,
            Self::StructuredOutput { .. } => true,
        }
    }

    /// Short message suitable for a blocking alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } => "Could not reach the AI service. Check your connection and try again.".to_string(),
            Self::Api { status: 401 | 403, .. } => "The API key was rejected. Check your configuration.".to_string(),
            Self::Api { status: 429, .. } => "Rate limit reached. Wait a moment and try again.".to_string(),
            Self::Api { .. } | Self::InvalidResponse { .. } | Self::EmptyResponse { .. } => {
                "The analysis failed. Please try again.".to_string()
            },
            Self::StructuredOutput { .. } => {
                "The AI response could not be read as a structured result. Please try again.".to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(GenerationError::Api { status: 503, message: String::new() }.is_retryable());
        assert!(GenerationError::Api { status: 429, message: String::new() }.is_retryable());
        assert!(!GenerationError::Api { status: 400, message: String::new() }.is_retryable());
    }

    #[test]
    fn test_empty_response_display_includes_finish_reason() {
        let err = GenerationError::EmptyResponse { finish_reason: Some("SAFETY".to_string()) };
        assert_eq!(err.to_string(), "Model returned no text (finish reason: SAFETY)");
        let err = GenerationError::EmptyResponse { finish_reason: None };
        assert_eq!(err.to_string(), "Model returned no text");
    }

    #[test]
    fn test_user_message_for_auth_failure() {
        let err = GenerationError::Api { status: 403, message: "denied".to_string() };
        assert!(err.user_message().contains("API key"));
    }
}
