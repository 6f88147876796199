//! Result of a generation round trip.

use serde::{Deserialize, Serialize};

use super::UsageMetrics;
use crate::protocol::GroundingMetadata;

/// Non-fatal problems encountered while assembling a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationWarning {
    /// Attachment skipped because its MIME type can neither be sent inline nor extracted
    UnsupportedAttachment { slot: String, name: String, mime_type: String },
    /// Word document could not be read; a placeholder was sent instead
    ExtractionFailed { slot: String, name: String, reason: String },
    /// Reference URL dropped because it does not parse
    InvalidUrl { url: String },
}

impl std::fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedAttachment { slot, name, mime_type } => {
                write!(f, "{} '{}' skipped: unsupported type {}", slot, name, mime_type)
            },
            Self::ExtractionFailed { slot, name, reason } => {
                write!(f, "{} '{}': text extraction failed ({})", slot, name, reason)
            },
            Self::InvalidUrl { url } => write!(f, "reference URL '{}' ignored: not a valid URL", url),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult<T> {
    /// Parsed JSON, or text with citation markers spliced in.
    pub data: T,
    pub usage: UsageMetrics,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
    #[serde(default)]
    pub warnings: Vec<GenerationWarning>,
}

impl<T> GenerationResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GenerationResult<U> {
        GenerationResult {
            data: f(self.data),
            usage: self.usage,
            grounding_metadata: self.grounding_metadata,
            warnings: self.warnings,
        }
    }
}
