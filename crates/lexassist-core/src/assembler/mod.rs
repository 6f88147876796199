// Request assembly
// Turns a GenerationRequest into the GenerateContent body: label + inline
// parts for native media, one extracted-text section for text documents, and
// a single trailing prompt part.

mod classify;
mod search;
mod thinking;

use lexassist_types::models::{DocumentSlot, GenerationWarning};
use lexassist_types::protocol::{
    Content, GenerateContentRequest, GenerationConfig, Part, PartMediaResolution, Tool,
};
use lexassist_types::{DocumentPayload, GenerationRequest, MediaResolution};
use tracing::{debug, warn};

use crate::extraction::extract_text;

pub use classify::{DocumentKind, MediaClass, DOCX_MIME};
pub use search::search_instruction;
pub use thinking::{resolve_thinking_config, supports_thinking_control};

pub const JSON_MIME: &str = "application/json";

/// A request ready to send, plus non-fatal problems found while building it.
#[derive(Debug, Clone)]
pub struct AssembledRequest {
    pub model: String,
    pub body: GenerateContentRequest,
    pub warnings: Vec<GenerationWarning>,
}

impl AssembledRequest {
    /// Parts of the single user turn.
    pub fn parts(&self) -> &[Part] {
        self.body.contents.first().map(|c| c.parts.as_slice()).unwrap_or_default()
    }
}

/// Accumulates parts and extracted text while documents are visited.
#[derive(Default)]
struct PartsBuilder {
    parts: Vec<Part>,
    extracted: String,
    warnings: Vec<GenerationWarning>,
}

impl PartsBuilder {
    fn add_document(
        &mut self,
        slot: DocumentSlot,
        doc: &DocumentPayload,
        resolution: MediaResolution,
    ) {
        match DocumentKind::classify(&doc.mime_type) {
            DocumentKind::NativeBinary(media) => {
                self.parts.push(Part::text(slot.label()));
                let media_resolution = media
                    .takes_resolution_hint()
                    .then(|| PartMediaResolution { level: resolution.as_api_str().to_string() });
                self.parts.push(Part::inline(&doc.mime_type, &doc.base64_data, media_resolution));
                debug!(slot = %slot, mime = %doc.mime_type, "Attached inline document");
            },
            DocumentKind::ExtractableText(format) => {
                let extracted = extract_text(format, &doc.base64_data);
                if let Some(reason) = extracted.failure {
                    self.warnings.push(GenerationWarning::ExtractionFailed {
                        slot: slot.to_string(),
                        name: doc.name().to_string(),
                        reason,
                    });
                }
                self.extracted.push_str(&format!(
                    "\n\n--- {} ({}) ---\n{}",
                    slot,
                    doc.name(),
                    extracted.text
                ));
                debug!(slot = %slot, chars = extracted.text.len(), "Appended extracted text");
            },
            DocumentKind::Unsupported => {
                warn!(slot = %slot, mime = %doc.mime_type, name = %doc.name(), "Skipping attachment with unsupported MIME type");
                self.warnings.push(GenerationWarning::UnsupportedAttachment {
                    slot: slot.to_string(),
                    name: doc.name().to_string(),
                    mime_type: doc.mime_type.clone(),
                });
            },
        }
    }
}

/// Build the GenerateContent body for `req`.
///
/// `default_model` is used when the request does not name one. Never fails:
/// unusable inputs are skipped and reported in `warnings`.
pub fn assemble(req: &GenerationRequest, default_model: &str) -> AssembledRequest {
    let model = if req.model_id.trim().is_empty() {
        default_model.to_string()
    } else {
        req.model_id.trim().to_string()
    };

    let mut builder = PartsBuilder::default();

    // Fixed order: playbook, main document, attachments
    if let Some(doc) = &req.context_document {
        builder.add_document(DocumentSlot::Context, doc, req.media_resolution);
    }
    if let Some(doc) = &req.main_document {
        builder.add_document(DocumentSlot::Main, doc, req.media_resolution);
    }
    for (i, doc) in req.additional_documents.iter().enumerate() {
        builder.add_document(DocumentSlot::Attachment(i + 1), doc, req.media_resolution);
    }

    let mut tools = Vec::new();

    let urls = valid_reference_urls(&req.reference_urls, &mut builder.warnings);
    if !urls.is_empty() {
        let listing: Vec<String> = urls.iter().map(|u| format!("- {}", u)).collect();
        builder.parts.push(Part::text(format!("REFERENCE URLS:\n{}", listing.join("\n"))));
        tools.push(Tool::url_context());
    }

    let mut final_prompt = req.prompt_text.clone();
    final_prompt.push_str(&builder.extracted);
    if req.use_web_search {
        tools.push(Tool::google_search());
        final_prompt.push_str(search_instruction(req.view_context));
    }
    builder.parts.push(Part::text(final_prompt));

    let mut config = GenerationConfig {
        thinking_config: resolve_thinking_config(&model, req.thinking_level),
        ..Default::default()
    };
    if let Some(schema) = &req.response_schema {
        config.response_mime_type = Some(JSON_MIME.to_string());
        config.response_schema = Some(schema.clone());
    }

    let system_instruction = (!req.system_instruction.trim().is_empty())
        .then(|| Content::system(req.system_instruction.clone()));

    debug!(
        model = %model,
        parts = builder.parts.len(),
        tools = tools.len(),
        json_mode = req.response_schema.is_some(),
        "Assembled generation request"
    );

    AssembledRequest {
        model,
        body: GenerateContentRequest {
            system_instruction,
            contents: vec![Content::user(builder.parts)],
            generation_config: (!config.is_empty()).then_some(config),
            tools,
        },
        warnings: builder.warnings,
    }
}

fn valid_reference_urls(raw: &[String], warnings: &mut Vec<GenerationWarning>) -> Vec<String> {
    raw.iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .filter_map(|u| match url::Url::parse(u) {
            Ok(_) => Some(u.to_string()),
            Err(e) => {
                warn!(url = %u, error = %e, "Ignoring invalid reference URL");
                warnings.push(GenerationWarning::InvalidUrl { url: u.to_string() });
                None
            },
        })
        .collect()
}
