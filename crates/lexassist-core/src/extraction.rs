//! Plain-text extraction for documents the model cannot take inline.
//!
//! Nothing here returns an error to the assembler: a document that cannot be
//! read becomes a fixed placeholder string and the request goes ahead.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use thiserror::Error;
use tracing::{debug, warn};

/// Sent in place of a Word document whose text could not be read.
pub const DOCX_PLACEHOLDER: &str = "[Could not extract text from Word document]";
/// Sent in place of a text attachment that is not valid base64.
pub const TEXT_PLACEHOLDER: &str = "[Could not decode text attachment]";

const DOCUMENT_XML: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("not a valid .docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("could not read word/document.xml: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document XML: {0}")]
    Xml(String),
}

/// Text-bearing formats the assembler extracts instead of sending inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Office Open XML word-processing document (.docx)
    WordDocument,
    /// UTF-8 text (plain, markdown, csv, json)
    PlainText,
}

/// Outcome of an extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Extracted text, or a placeholder when extraction failed.
    pub text: String,
    /// Failure reason when `text` is a placeholder.
    pub failure: Option<String>,
}

/// Extract text from a base64 payload, substituting a placeholder on failure.
pub fn extract_text(format: TextFormat, base64_data: &str) -> ExtractedText {
    let (result, placeholder) = match format {
        TextFormat::WordDocument => (extract_docx_text(base64_data), DOCX_PLACEHOLDER),
        TextFormat::PlainText => (decode_plain_text(base64_data), TEXT_PLACEHOLDER),
    };
    match result {
        Ok(text) => ExtractedText { text, failure: None },
        Err(e) => {
            warn!(format = ?format, error = %e, "Text extraction failed, using placeholder");
            ExtractedText { text: placeholder.to_string(), failure: Some(e.to_string()) }
        },
    }
}

/// Decode a base64 text attachment. Bytes that are not UTF-8 become U+FFFD.
pub fn decode_plain_text(base64_data: &str) -> Result<String, ExtractionError> {
    let bytes = STANDARD.decode(base64_data.trim())?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                bytes = e.as_bytes().len(),
                "Text attachment is not valid UTF-8, replacing invalid bytes"
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        },
    }
}

/// Raw text of a .docx file, one line per paragraph.
pub fn extract_docx_text(base64_data: &str) -> Result<String, ExtractionError> {
    let bytes = STANDARD.decode(base64_data.trim())?;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_XML)?.read_to_string(&mut xml)?;
    let text = document_xml_to_text(&xml)?;
    debug!(chars = text.len(), "Extracted text from Word document");
    Ok(text)
}

/// Walk WordprocessingML, keeping `w:t` runs and turning paragraph, break and
/// tab elements into whitespace.
fn document_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {},
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {},
            },
            Ok(Event::Text(t)) if in_text_run => {
                let raw = std::str::from_utf8(&t).map_err(|e| ExtractionError::Xml(e.to_string()))?;
                let text = quick_xml::escape::unescape(raw)
                    .map_err(|e| ExtractionError::Xml(e.to_string()))?;
                out.push_str(&text);
            },
            Ok(Event::GeneralRef(r)) if in_text_run => {
                let name = std::str::from_utf8(&r).map_err(|e| ExtractionError::Xml(e.to_string()))?;
                out.push_str(&resolve_entity(name));
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => return Err(ExtractionError::Xml(e.to_string())),
        }
    }

    Ok(out.trim_end().to_string())
}

fn resolve_entity(name: &str) -> String {
    if let Some(code) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(code, 16).ok().and_then(char::from_u32).map(String::from).unwrap_or_default();
    }
    if let Some(code) = name.strip_prefix('#') {
        return code.parse::<u32>().ok().and_then(char::from_u32).map(String::from).unwrap_or_default();
    }
    quick_xml::escape::resolve_predefined_entity(name).unwrap_or_default().to_string()
}
