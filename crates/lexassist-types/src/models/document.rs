//! User-supplied documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file read into memory and base64-encoded, ready for the request assembler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub mime_type: String,
    /// Standard base64 (with padding) of the file bytes.
    pub base64_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl DocumentPayload {
    pub fn new(mime_type: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self { mime_type: mime_type.into(), base64_data: base64_data.into(), display_name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Display name, falling back to the MIME type.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.mime_type)
    }
}

/// Position a document occupies in a request. Determines its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    /// Reference playbook supplied as context
    Context,
    /// The document under review
    Main,
    /// Additional attachment, 1-based
    Attachment(usize),
}

impl DocumentSlot {
    /// Label emitted as a text part before inline binary content.
    pub fn label(&self) -> String {
        match self {
            Self::Context => "REFERENCE-PLAYBOOK:".to_string(),
            Self::Main => "MAIN DOCUMENT:".to_string(),
            Self::Attachment(n) => format!("ATTACHMENT {}:", n),
        }
    }
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context => write!(f, "REFERENCE-PLAYBOOK"),
            Self::Main => write!(f, "MAIN DOCUMENT"),
            Self::Attachment(n) => write!(f, "ATTACHMENT {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_labels() {
        assert_eq!(DocumentSlot::Context.label(), "REFERENCE-PLAYBOOK:");
        assert_eq!(DocumentSlot::Main.label(), "MAIN DOCUMENT:");
        assert_eq!(DocumentSlot::Attachment(2).label(), "ATTACHMENT 2:");
    }

    #[test]
    fn test_name_falls_back_to_mime() {
        let doc = DocumentPayload::new("application/pdf", "");
        assert_eq!(doc.name(), "application/pdf");
        assert_eq!(doc.with_name("nda.pdf").name(), "nda.pdf");
    }
}
