//! MIME-type dispatch, computed once per document.

use crate::extraction::TextFormat;

pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Media families the endpoint consumes natively as inline data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
    Pdf,
    Image,
    Audio,
    Video,
}

impl MediaClass {
    /// Image and video parts carry a media-resolution hint.
    pub fn takes_resolution_hint(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

/// How the assembler treats a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Sent as an inline-data part after a label
    NativeBinary(MediaClass),
    /// Converted to text and appended to the extracted-text section
    ExtractableText(TextFormat),
    /// Skipped with a warning
    Unsupported,
}

impl DocumentKind {
    pub fn classify(mime_type: &str) -> Self {
        let essence = mime_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        let (top, _) = essence.split_once('/').unwrap_or((essence.as_str(), ""));

        match (essence.as_str(), top) {
            ("application/pdf", _) => Self::NativeBinary(MediaClass::Pdf),
            (_, "image") => Self::NativeBinary(MediaClass::Image),
            (_, "audio") => Self::NativeBinary(MediaClass::Audio),
            (_, "video") => Self::NativeBinary(MediaClass::Video),
            (DOCX_MIME, _) => Self::ExtractableText(TextFormat::WordDocument),
            ("text/plain" | "text/markdown" | "text/csv" | "application/json", _) => {
                Self::ExtractableText(TextFormat::PlainText)
            },
            _ => Self::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_types() {
        assert_eq!(DocumentKind::classify("application/pdf"), DocumentKind::NativeBinary(MediaClass::Pdf));
        assert_eq!(DocumentKind::classify("image/png"), DocumentKind::NativeBinary(MediaClass::Image));
        assert_eq!(DocumentKind::classify("audio/mpeg"), DocumentKind::NativeBinary(MediaClass::Audio));
        assert_eq!(DocumentKind::classify("video/mp4"), DocumentKind::NativeBinary(MediaClass::Video));
    }

    #[test]
    fn test_text_types() {
        assert_eq!(DocumentKind::classify(DOCX_MIME), DocumentKind::ExtractableText(TextFormat::WordDocument));
        assert_eq!(
            DocumentKind::classify("text/plain; charset=utf-8"),
            DocumentKind::ExtractableText(TextFormat::PlainText)
        );
    }

    #[test]
    fn test_case_insensitive_and_unknown() {
        assert_eq!(DocumentKind::classify("Application/PDF"), DocumentKind::NativeBinary(MediaClass::Pdf));
        assert_eq!(DocumentKind::classify("application/x-weird"), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::classify(""), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::classify("application/msword"), DocumentKind::Unsupported);
    }

    #[test]
    fn test_resolution_hint_only_for_visual_media() {
        assert!(MediaClass::Image.takes_resolution_hint());
        assert!(MediaClass::Video.takes_resolution_hint());
        assert!(!MediaClass::Pdf.takes_resolution_hint());
        assert!(!MediaClass::Audio.takes_resolution_hint());
    }
}
