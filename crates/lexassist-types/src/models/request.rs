//! Generation request parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::DocumentPayload;

/// Coarse thinking effort selected by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThinkingLevel {
    Low,
    #[default]
    Medium,
    /// Model default; no budget is sent.
    High,
}

impl ThinkingLevel {
    /// Token budget for this level. `None` means "let the model decide".
    pub fn budget(self) -> Option<u32> {
        match self {
            Self::Low => Some(2048),
            Self::Medium => Some(8192),
            Self::High => None,
        }
    }

    /// Parse from string.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for ThinkingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Resolution hint attached to image and video parts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MediaResolution {
    Low,
    Medium,
    #[default]
    High,
}

impl MediaResolution {
    /// Wire value expected by the endpoint.
    pub fn as_api_str(self) -> &'static str {
        match self {
            Self::Low => "MEDIA_RESOLUTION_LOW",
            Self::Medium => "MEDIA_RESOLUTION_MEDIUM",
            Self::High => "MEDIA_RESOLUTION_HIGH",
        }
    }

    /// Parse from string.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for MediaResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Feature the request originates from. Selects the web-search instruction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViewContext {
    ContractReview,
    NdaTriage,
    Dpia,
    RiskMatrix,
    MarketingCompliance,
    Chronology,
    #[default]
    General,
}

impl fmt::Display for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Self::ContractReview => "contract_review",
            Self::NdaTriage => "nda_triage",
            Self::Dpia => "dpia",
            Self::RiskMatrix => "risk_matrix",
            Self::MarketingCompliance => "marketing_compliance",
            Self::Chronology => "chronology",
            Self::General => "general",
        };
        f.write_str(s)
    }
}

/// Everything needed to build one GenerateContent call. Constructed per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt_text: String,
    #[serde(default)]
    pub system_instruction: String,
    #[serde(default)]
    pub main_document: Option<DocumentPayload>,
    #[serde(default)]
    pub context_document: Option<DocumentPayload>,
    #[serde(default)]
    pub additional_documents: Vec<DocumentPayload>,
    #[serde(default)]
    pub reference_urls: Vec<String>,
    #[serde(default)]
    pub use_web_search: bool,
    /// Empty means "use the client's default model".
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub response_schema: Option<Value>,
    #[serde(default)]
    pub thinking_level: ThinkingLevel,
    #[serde(default)]
    pub media_resolution: MediaResolution,
    #[serde(default)]
    pub view_context: ViewContext,
}

impl GenerationRequest {
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self { prompt_text: prompt_text.into(), ..Default::default() }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_main_document(mut self, doc: DocumentPayload) -> Self {
        self.main_document = Some(doc);
        self
    }

    pub fn with_context_document(mut self, doc: DocumentPayload) -> Self {
        self.context_document = Some(doc);
        self
    }

    pub fn with_attachment(mut self, doc: DocumentPayload) -> Self {
        self.additional_documents.push(doc);
        self
    }

    pub fn with_reference_urls(mut self, urls: Vec<String>) -> Self {
        self.reference_urls = urls;
        self
    }

    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.use_web_search = enabled;
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_thinking_level(mut self, level: ThinkingLevel) -> Self {
        self.thinking_level = level;
        self
    }

    pub fn with_media_resolution(mut self, resolution: MediaResolution) -> Self {
        self.media_resolution = resolution;
        self
    }

    pub fn with_view_context(mut self, view: ViewContext) -> Self {
        self.view_context = view;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_budgets() {
        assert_eq!(ThinkingLevel::Low.budget(), Some(2048));
        assert_eq!(ThinkingLevel::Medium.budget(), Some(8192));
        assert_eq!(ThinkingLevel::High.budget(), None);
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!(ThinkingLevel::from_string(" HIGH "), Some(ThinkingLevel::High));
        assert_eq!(ThinkingLevel::from_string("max"), None);
        assert_eq!(MediaResolution::from_string("low"), Some(MediaResolution::Low));
        assert_eq!(MediaResolution::Medium.as_api_str(), "MEDIA_RESOLUTION_MEDIUM");
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let req: GenerationRequest =
            serde_json::from_str(r#"{"promptText":"Review this"}"#).expect("deserialize");
        assert_eq!(req.prompt_text, "Review this");
        assert_eq!(req.thinking_level, ThinkingLevel::Medium);
        assert_eq!(req.view_context, ViewContext::General);
        assert!(!req.use_web_search);
    }
}
