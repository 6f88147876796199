//! One generation round trip: assemble, call, post-process.

use lexassist_types::protocol::GenerateContentResponse;
use lexassist_types::{GenerationError, GenerationRequest, GenerationResult, UsageMetrics};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::assembler::assemble;
use crate::citations::inject_citations;
use crate::client::ModelEndpoint;
use crate::structured::parse_structured;

/// Raw outcome shared by both entry points.
struct RoundTrip {
    text: String,
    response: GenerateContentResponse,
    usage: UsageMetrics,
    warnings: Vec<lexassist_types::models::GenerationWarning>,
}

async fn round_trip<E>(endpoint: &E, req: &GenerationRequest) -> Result<RoundTrip, GenerationError>
where
    E: ModelEndpoint + ?Sized,
{
    let assembled = assemble(req, endpoint.default_model());
    let response = endpoint.generate_content(&assembled.model, &assembled.body).await?;

    let text = response.text().ok_or_else(|| GenerationError::EmptyResponse {
        finish_reason: response.candidates.first().and_then(|c| c.finish_reason.clone()),
    })?;

    let usage = response
        .usage_metadata
        .as_ref()
        .map(|meta| UsageMetrics::from_metadata(meta, assembled.model.as_str()))
        .unwrap_or_else(|| UsageMetrics { model_id: assembled.model.clone(), ..Default::default() });

    info!(
        model = %usage.model_id,
        view = %req.view_context,
        prompt_tokens = usage.prompt_tokens,
        output_tokens = usage.output_tokens,
        warnings = assembled.warnings.len(),
        "Generation complete"
    );

    Ok(RoundTrip { text, response, usage, warnings: assembled.warnings })
}

/// Free-text generation. Grounding citations are spliced into the text.
pub async fn generate_text<E>(endpoint: &E, req: &GenerationRequest) -> Result<GenerationResult<String>, GenerationError>
where
    E: ModelEndpoint + ?Sized,
{
    let RoundTrip { text, response, usage, warnings } = round_trip(endpoint, req).await?;
    let grounding_metadata = response.grounding_metadata().cloned();
    let data = inject_citations(&text, grounding_metadata.as_ref());
    if data.len() != text.len() {
        debug!(added = data.len() - text.len(), "Inserted citation markers");
    }
    Ok(GenerationResult { data, usage, grounding_metadata, warnings })
}

/// Schema-constrained generation parsed into `T`.
///
/// The request should carry a `response_schema`; the text is parsed as JSON
/// either way and a parse failure is `GenerationError::StructuredOutput`.
pub async fn generate_structured<T, E>(
    endpoint: &E,
    req: &GenerationRequest,
) -> Result<GenerationResult<T>, GenerationError>
where
    T: DeserializeOwned,
    E: ModelEndpoint + ?Sized,
{
    let RoundTrip { text, response, usage, warnings } = round_trip(endpoint, req).await?;
    let data = parse_structured::<T>(&text)?;
    Ok(GenerationResult { data, usage, grounding_metadata: response.grounding_metadata().cloned(), warnings })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use lexassist_types::protocol::GenerateContentRequest;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Endpoint that replays canned responses and records what it was sent.
    pub(crate) struct ScriptedEndpoint {
        responses: Mutex<Vec<Result<Value, GenerationError>>>,
        pub(crate) seen: Mutex<Vec<(String, GenerateContentRequest)>>,
    }

    impl ScriptedEndpoint {
        pub(crate) fn new(responses: Vec<Result<Value, GenerationError>>) -> Self {
            Self { responses: Mutex::new(responses), seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl ModelEndpoint for ScriptedEndpoint {
        fn default_model(&self) -> &str {
            "gemini-2.5-pro"
        }

        async fn generate_content(
            &self,
            model: &str,
            body: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GenerationError> {
            self.seen.lock().unwrap().push((model.to_string(), body.clone()));
            let next = self.responses.lock().unwrap().remove(0)?;
            Ok(serde_json::from_value(next).unwrap())
        }
    }

    pub(crate) fn text_response(text: &str) -> Value {
        json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}],
            "usageMetadata": {"promptTokenCount": 100, "candidatesTokenCount": 20, "totalTokenCount": 120}
        })
    }

    #[tokio::test]
    async fn test_generate_text_injects_citations() {
        let mut body = text_response("Cats meow. Dogs bark.");
        body["candidates"][0]["groundingMetadata"] = json!({
            "webSearchQueries": ["cat sounds"],
            "groundingChunks": [{"web": {"uri": "https://cats.example", "title": "Cats"}}],
            "groundingSupports": [{"segment": {"startIndex": 0, "endIndex": 10}, "groundingChunkIndices": [0]}]
        });
        let endpoint = ScriptedEndpoint::new(vec![Ok(body)]);

        let result = generate_text(&endpoint, &GenerationRequest::new("Tell me")).await.unwrap();
        assert_eq!(result.data, "Cats meow. [1] Dogs bark.");
        assert_eq!(result.usage.prompt_tokens, 100);
        assert_eq!(result.usage.model_id, "gemini-2.5-pro");
        assert!(result.grounding_metadata.is_some());
    }

    #[tokio::test]
    async fn test_generate_structured_parses_fenced_json() {
        let endpoint = ScriptedEndpoint::new(vec![Ok(text_response("```json\n{\"risks\": []}\n```"))]);
        let result: GenerationResult<lexassist_types::models::RiskMatrix> =
            generate_structured(&endpoint, &GenerationRequest::new("x")).await.unwrap();
        assert!(result.data.risks.is_empty());
    }

    #[tokio::test]
    async fn test_generate_structured_rejects_prose() {
        let endpoint = ScriptedEndpoint::new(vec![Ok(text_response("I cannot help with that."))]);
        let err = generate_structured::<Value, _>(&endpoint, &GenerationRequest::new("x")).await.unwrap_err();
        assert!(matches!(err, GenerationError::StructuredOutput { .. }));
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let endpoint = ScriptedEndpoint::new(vec![Ok(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))]);
        let err = generate_text(&endpoint, &GenerationRequest::new("x")).await.unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse { finish_reason: Some("SAFETY".to_string()) });
    }

    #[tokio::test]
    async fn test_endpoint_error_propagates_unchanged() {
        let api = GenerationError::Api { status: 503, message: "overloaded".to_string() };
        let endpoint = ScriptedEndpoint::new(vec![Err(api.clone())]);
        let err = generate_text(&endpoint, &GenerationRequest::new("x")).await.unwrap_err();
        assert_eq!(err, api);
    }

    #[tokio::test]
    async fn test_warnings_and_model_override_flow_through() {
        let endpoint = ScriptedEndpoint::new(vec![Ok(text_response("ok"))]);
        let req = GenerationRequest::new("x")
            .with_model("gemini-2.5-flash")
            .with_attachment(lexassist_types::DocumentPayload::new("application/x-weird", "AAAA"));
        let result = generate_text(&endpoint, &req).await.unwrap();

        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.usage.model_id, "gemini-2.5-flash");
        assert_eq!(endpoint.seen.lock().unwrap()[0].0, "gemini-2.5-flash");
    }
}
