//! Google Gemini GenerateContent API types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::grounding::GroundingMetadata;

/// Gemini content role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeminiRole {
    User,
    Model,
}

/// A role-tagged list of parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<GeminiRole>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self { role: Some(GeminiRole::User), parts }
    }

    /// System instructions are sent without a role.
    pub fn system(text: impl Into<String>) -> Self {
        Self { role: None, parts: vec![Part::text(text)] }
    }
}

/// Gemini content part.
///
/// `Other` keeps parts this crate does not model (function calls, executable
/// code) so a response carrying them still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
        #[serde(rename = "mediaResolution", default, skip_serializing_if = "Option::is_none")]
        media_resolution: Option<PartMediaResolution>,
    },
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    Other(Value),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into(), thought: None }
    }

    pub fn inline(
        mime_type: impl Into<String>,
        data: impl Into<String>,
        media_resolution: Option<PartMediaResolution>,
    ) -> Self {
        Self::InlineData {
            inline_data: InlineData { mime_type: mime_type.into(), data: data.into() },
            media_resolution,
        }
    }

    pub fn is_inline_data(&self) -> bool {
        matches!(self, Self::InlineData { .. })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Gemini inline data (PDF, images, audio, video).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Per-part media resolution hint, e.g. `{"level": "MEDIA_RESOLUTION_HIGH"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartMediaResolution {
    pub level: String,
}

/// Thinking control. An absent budget lets the model decide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_thoughts: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

impl GenerationConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Built-in capability requested from the endpoint.
///
/// Serializes as `{"googleSearch": {}}` / `{"urlContext": {}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    GoogleSearch(EmptyConfig),
    UrlContext(EmptyConfig),
}

impl Tool {
    pub fn google_search() -> Self {
        Self::GoogleSearch(EmptyConfig {})
    }

    pub fn url_context() -> Self {
        Self::UrlContext(EmptyConfig {})
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EmptyConfig {}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Gemini usage metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub cached_content_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    #[serde(default)]
    pub total_token_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated non-thought text of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut out = String::new();
        let mut found = false;
        for part in parts {
            if let Part::Text { text, thought } = part {
                if thought.unwrap_or(false) {
                    continue;
                }
                out.push_str(text);
                found = true;
            }
        }
        found.then_some(out)
    }

    pub fn grounding_metadata(&self) -> Option<&GroundingMetadata> {
        self.candidates.first()?.grounding_metadata.as_ref()
    }
}
