//! Grounding metadata returned when the search or URL-context tools are used.

use serde::{Deserialize, Serialize};

/// Citations the endpoint attaches to a candidate.
///
/// Offsets in `grounding_supports` refer to the candidate text as returned,
/// before any citation markers are spliced in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub web_search_queries: Vec<String>,
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
    #[serde(default)]
    pub grounding_supports: Vec<GroundingSupport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<GroundingChunkWeb>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunkWeb {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingSupport {
    #[serde(default)]
    pub segment: Option<Segment>,
    /// Indices into `grounding_chunks`. Signed because the endpoint does not
    /// guarantee validity; callers must range-check.
    #[serde(default)]
    pub grounding_chunk_indices: Vec<i64>,
}

/// Byte range of the supported claim in the candidate text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default)]
    pub start_index: Option<i64>,
    #[serde(default)]
    pub end_index: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
}

impl GroundingSupport {
    pub fn end_index(&self) -> Option<i64> {
        self.segment.as_ref()?.end_index
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_shape() {
        let meta: GroundingMetadata = serde_json::from_value(json!({
            "webSearchQueries": ["dsgvo art 35"],
            "groundingChunks": [
                {"web": {"uri": "https://example.org/a", "title": "A"}},
                {"retrievedContext": {"uri": "gs://bucket/x"}}
            ],
            "groundingSupports": [
                {"segment": {"endIndex": 12, "text": "claim"}, "groundingChunkIndices": [0]}
            ]
        }))
        .unwrap();

        assert_eq!(meta.web_search_queries, vec!["dsgvo art 35"]);
        assert_eq!(meta.grounding_chunks.len(), 2);
        assert!(meta.grounding_chunks[1].web.is_none());
        assert_eq!(meta.grounding_supports[0].end_index(), Some(12));
        assert_eq!(meta.grounding_chunks[0].web.as_ref().unwrap().uri.as_deref(), Some("https://example.org/a"));
    }

    #[test]
    fn test_missing_start_index_is_none() {
        let support: GroundingSupport =
            serde_json::from_value(json!({"segment": {"endIndex": 5}})).unwrap();
        assert_eq!(support.segment.unwrap().start_index, None);
        assert!(support.grounding_chunk_indices.is_empty());
    }
}
