use lexassist_types::{
    DocumentPayload, GenerationError, GenerationRequest, GenerationResult, MediaResolution, ThinkingLevel,
};
use serde::{Deserialize, Serialize};

use crate::prompts::FeaturePrompt;

/// What the user has entered for one feature. Survives failed runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureInputs {
    pub text: String,
    pub main_document: Option<DocumentPayload>,
    pub context_document: Option<DocumentPayload>,
    pub attachments: Vec<DocumentPayload>,
    pub reference_urls: Vec<String>,
    pub use_web_search: bool,
    /// Empty means the client default.
    pub model_id: String,
    pub thinking_level: ThinkingLevel,
    pub media_resolution: MediaResolution,
}

impl FeatureInputs {
    /// Build the request for `prompt` from these inputs.
    pub fn to_request(&self, prompt: &FeaturePrompt) -> GenerationRequest {
        GenerationRequest {
            prompt_text: prompt.task_text(&self.text),
            system_instruction: prompt.system_instruction.to_string(),
            main_document: self.main_document.clone(),
            context_document: self.context_document.clone(),
            additional_documents: self.attachments.clone(),
            reference_urls: self.reference_urls.clone(),
            use_web_search: self.use_web_search,
            model_id: self.model_id.clone(),
            response_schema: prompt.response_schema.clone(),
            thinking_level: self.thinking_level,
            media_resolution: self.media_resolution,
            view_context: prompt.view,
        }
    }

    /// Whether there is anything to send at all.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
            && self.main_document.is_none()
            && self.context_document.is_none()
            && self.attachments.is_empty()
            && self.reference_urls.is_empty()
    }
}

/// Inputs, last result and progress of one feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureState<T> {
    pub inputs: FeatureInputs,
    pub result: Option<GenerationResult<T>>,
    pub loading: bool,
    /// User-facing message of the last failure.
    pub error: Option<String>,
}

impl<T> Default for FeatureState<T> {
    fn default() -> Self {
        Self { inputs: FeatureInputs::default(), result: None, loading: false, error: None }
    }
}

impl<T> FeatureState<T> {
    /// Mark a run as started. Clears the previous error, keeps the previous result.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, result: GenerationResult<T>) {
        self.loading = false;
        self.error = None;
        self.result = Some(result);
    }

    /// Record a failure. Inputs stay as they were.
    pub fn fail(&mut self, err: &GenerationError) {
        self.loading = false;
        self.error = Some(err.user_message());
    }

    /// Start over with empty inputs but the same model settings.
    pub fn reset(&mut self) {
        let inputs = FeatureInputs {
            model_id: std::mem::take(&mut self.inputs.model_id),
            thinking_level: self.inputs.thinking_level,
            media_resolution: self.inputs.media_resolution,
            ..Default::default()
        };
        *self = Self { inputs, ..Default::default() };
    }
}
