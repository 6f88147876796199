//! Parsing of schema-constrained (JSON) model output.

use lexassist_types::GenerationError;
use serde::de::DeserializeOwned;

/// Remove a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````).
pub fn strip_code_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```") {
        s = strip_info_string(rest);
    }
    if let Some(rest) = s.trim_end().strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

/// Drop the fence info string ("json", "JSON", ...), whether the body starts
/// on the next line or on the same line.
fn strip_info_string(rest: &str) -> &str {
    let tag_len = rest.find(|c: char| !c.is_ascii_alphanumeric()).unwrap_or(rest.len());
    if tag_len == 0 {
        return rest;
    }
    let after = &rest[tag_len..];
    match after.chars().next() {
        Some(c) if c.is_whitespace() || c == '{' || c == '[' => after,
        _ => rest,
    }
}

/// Parse model output into `T`. Failure is a hard error; nothing is repaired.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T, GenerationError> {
    let body = strip_code_fences(raw);
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, chars = raw.len(), "Structured output did not parse");
        GenerationError::StructuredOutput { message: e.to_string() }
    })
}
