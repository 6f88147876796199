//! Inline citation markers for grounded responses.
//!
//! Grounding supports carry byte offsets into the response text as the model
//! returned it. Markers are computed against that snapshot and applied from
//! the end of the string backwards, so every offset still refers to the
//! original text when its marker is placed.

use lexassist_types::protocol::{GroundingMetadata, GroundingSupport};
use tracing::debug;

/// One pending insertion into the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edit {
    at: usize,
    marker: String,
}

/// Splice `[n, m]` markers after each supported segment.
///
/// Returns `text` unchanged when there is no metadata, no supports or no
/// chunks. Supports with an out-of-range or non-boundary offset, or without a
/// single valid chunk index, are skipped.
pub fn inject_citations(text: &str, metadata: Option<&GroundingMetadata>) -> String {
    let Some(meta) = metadata else {
        return text.to_string();
    };
    if meta.grounding_supports.is_empty() || meta.grounding_chunks.is_empty() {
        return text.to_string();
    }

    let mut edits: Vec<Edit> = meta
        .grounding_supports
        .iter()
        .filter_map(|support| edit_for(text, support, meta.grounding_chunks.len()))
        .collect();
    // Stable: equal offsets keep metadata order, matching in-place splicing.
    edits.sort_by(|a, b| b.at.cmp(&a.at));

    let skipped = meta.grounding_supports.len() - edits.len();
    if skipped > 0 {
        debug!(skipped, "Skipped grounding supports with unusable offsets or indices");
    }

    apply_back_to_front(text, &edits)
}

fn edit_for(text: &str, support: &GroundingSupport, chunk_count: usize) -> Option<Edit> {
    let end = usize::try_from(support.end_index()?).ok().filter(|&e| e > 0)?;
    if end > text.len() || !text.is_char_boundary(end) {
        return None;
    }

    let numbers: Vec<String> = support
        .grounding_chunk_indices
        .iter()
        .filter_map(|&i| usize::try_from(i).ok())
        .filter(|&i| i < chunk_count)
        .map(|i| (i + 1).to_string())
        .collect();
    if numbers.is_empty() {
        return None;
    }

    Some(Edit { at: end, marker: format!(" [{}]", numbers.join(", ")) })
}

/// Apply edits sorted by descending offset to an immutable snapshot.
///
/// Precondition: `edits` is ordered by non-increasing `at`, and every `at` is a
/// char boundary of `snapshot`.
fn apply_back_to_front(snapshot: &str, edits: &[Edit]) -> String {
    debug_assert!(edits.windows(2).all(|w| w[0].at >= w[1].at));

    let extra: usize = edits.iter().map(|e| e.marker.len()).sum();
    let mut pieces: Vec<&str> = Vec::with_capacity(edits.len() * 2 + 1);
    let mut cursor = snapshot.len();
    for edit in edits {
        pieces.push(&snapshot[edit.at..cursor]);
        pieces.push(&edit.marker);
        cursor = edit.at;
    }
    pieces.push(&snapshot[..cursor]);

    let mut out = String::with_capacity(snapshot.len() + extra);
    for piece in pieces.iter().rev() {
        out.push_str(piece);
    }
    out
}

/// Markdown list of the web sources, numbered like the inline markers.
///
/// Chunks without a web reference keep their number but are not listed.
pub fn sources_footer(metadata: &GroundingMetadata) -> Option<String> {
    let lines: Vec<String> = metadata
        .grounding_chunks
        .iter()
        .enumerate()
        .filter_map(|(i, chunk)| {
            let web = chunk.web.as_ref()?;
            let uri = web.uri.as_deref()?;
            let title = web.title.as_deref().unwrap_or(uri);
            Some(format!("{}. [{}]({})", i + 1, title, uri))
        })
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(format!("\n\n**Sources:**\n{}", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexassist_types::protocol::{GroundingChunk, GroundingChunkWeb, Segment};

    fn chunk(uri: &str) -> GroundingChunk {
        GroundingChunk {
            web: Some(GroundingChunkWeb { uri: Some(uri.to_string()), title: Some(uri.to_string()) }),
        }
    }

    fn support(end: i64, indices: &[i64]) -> GroundingSupport {
        GroundingSupport {
            segment: Some(Segment { start_index: None, end_index: Some(end), text: None }),
            grounding_chunk_indices: indices.to_vec(),
        }
    }

    fn meta(chunks: usize, supports: Vec<GroundingSupport>) -> GroundingMetadata {
        GroundingMetadata {
            web_search_queries: vec![],
            grounding_chunks: (0..chunks).map(|i| chunk(&format!("https://s{}.example", i))).collect(),
            grounding_supports: supports,
        }
    }

    #[test]
    fn test_single_marker_after_segment() {
        let m = meta(1, vec![support(10, &[0])]);
        assert_eq!(inject_citations("Cats meow. Dogs bark.", Some(&m)), "Cats meow. [1] Dogs bark.");
    }

    #[test]
    fn test_multiple_supports_in_any_metadata_order() {
        let text = "Cats meow. Dogs bark.";
        let forward = meta(3, vec![support(10, &[0]), support(21, &[1, 2])]);
        let reversed = meta(3, vec![support(21, &[1, 2]), support(10, &[0])]);
        let expected = "Cats meow. [1] Dogs bark. [2, 3]";
        assert_eq!(inject_citations(text, Some(&forward)), expected);
        assert_eq!(inject_citations(text, Some(&reversed)), expected);
    }

    #[test]
    fn test_text_outside_markers_is_unchanged() {
        let text = "Art. 35 DSGVO requires a DPIA. High risk triggers it. Consult the DPO.";
        let m = meta(2, vec![support(30, &[0]), support(53, &[1]), support(70, &[0, 1])]);
        let out = inject_citations(text, Some(&m));
        let stripped = out.replace(" [1]", "").replace(" [2]", "").replace(" [1, 2]", "");
        assert_eq!(stripped, text);
        assert!(out.ends_with("Consult the DPO. [1, 2]"));
    }

    #[test]
    fn test_out_of_range_offsets_are_skipped() {
        let text = "Short.";
        let m = meta(1, vec![support(500, &[0]), support(-3, &[0]), support(0, &[0]), support(6, &[0])]);
        assert_eq!(inject_citations(text, Some(&m)), "Short. [1]");
    }

    #[test]
    fn test_invalid_chunk_indices_are_dropped() {
        let text = "Claim.";
        let only_bad = meta(2, vec![support(6, &[5, -1])]);
        assert_eq!(inject_citations(text, Some(&only_bad)), text);

        let mixed = meta(2, vec![support(6, &[7, 1])]);
        assert_eq!(inject_citations(text, Some(&mixed)), "Claim. [2]");
    }

    #[test]
    fn test_no_metadata_is_identity() {
        let text = "Nothing grounded here.";
        assert_eq!(inject_citations(text, None), text);
        assert_eq!(inject_citations(text, Some(&meta(3, vec![]))), text);
        assert_eq!(inject_citations(text, Some(&meta(0, vec![support(5, &[0])]))), text);
    }

    #[test]
    fn test_missing_segment_is_skipped() {
        let mut m = meta(1, vec![support(4, &[0])]);
        m.grounding_supports.push(GroundingSupport { segment: None, grounding_chunk_indices: vec![0] });
        assert_eq!(inject_citations("Text here", Some(&m)), "Text [1] here");
    }

    #[test]
    fn test_offset_inside_multibyte_char_is_skipped() {
        // "§" is two bytes; offset 1 splits it
        let text = "§ 5 UWG";
        let m = meta(1, vec![support(1, &[0]), support(2, &[0])]);
        assert_eq!(inject_citations(text, Some(&m)), "§ [1] 5 UWG");
    }

    #[test]
    fn test_equal_offsets_match_in_place_splicing() {
        let m = meta(2, vec![support(5, &[0]), support(5, &[1])]);
        // Processing [1] first then inserting [2] at the same spot puts [2] first
        assert_eq!(inject_citations("Claim rest", Some(&m)), "Claim [2] [1] rest");
    }

    #[test]
    fn test_sources_footer_numbers_match_markers() {
        let mut m = meta(2, vec![]);
        m.grounding_chunks.insert(0, GroundingChunk { web: None });
        let footer = sources_footer(&m).unwrap();
        assert_eq!(
            footer,
            "\n\n**Sources:**\n2. [https://s0.example](https://s0.example)\n3. [https://s1.example](https://s1.example)"
        );
        assert!(sources_footer(&meta(0, vec![])).is_none());
    }
}
