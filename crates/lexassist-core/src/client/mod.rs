//! Gemini GenerateContent client.
//!
//! `GeminiClient` is built once from `AppConfig`. A missing API key fails here,
//! before anything touches the network. Endpoint errors are mapped to
//! `GenerationError` and handed back unchanged; there is no retry loop.


use async_trait::async_trait;
use lexassist_types::protocol::{GenerateContentRequest, GenerateContentResponse};
use lexassist_types::{AppConfig, ConfigError, GenerationError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::API_KEY_ENV;
use crate::error::AppResult;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Something that can answer a GenerateContent call.
///
/// The service only talks to this trait, so tests and alternative backends
/// can stand in for the real endpoint.
#[async_trait]
pub trait ModelEndpoint: Send + Sync {
    /// Model used when a request leaves `model_id` empty.
    fn default_model(&self) -> &str;

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;
}

/// Connection settings derived from `AppConfig`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub default_model: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Fails with `MissingCredential` when the config carries no usable key.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| ConfigError::MissingCredential { variable: API_KEY_ENV.to_string() })?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            default_model: config.default_model.clone(),
            timeout_secs: config.timeout_secs,
        })
    }
}

pub struct GeminiClient {
    client: Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;
        let config = ClientConfig::from_app_config(config)?;
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Gemini client ready");
        Ok(Self { client, config })
    }

    fn endpoint_url(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/v1beta/models/{}:generateContent", self.config.base_url, model)
    }
}

#[async_trait]
impl ModelEndpoint for GeminiClient {
    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let url = self.endpoint_url(model);
        info!(model = %model, "Calling generateContent");

        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(model = %model, error = %e, "generateContent request failed");
                GenerationError::Transport { message: e.to_string() }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = api_error_message(&body);
            warn!(model = %model, status = status.as_u16(), message = %message, "generateContent returned an error");
            return Err(GenerationError::Api { status: status.as_u16(), message });
        }

        let text = resp.text().await.map_err(|e| GenerationError::Transport { message: e.to_string() })?;
        let response: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::InvalidResponse { message: e.to_string() })?;

        debug!(
            model = %model,
            candidates = response.candidates.len(),
            grounded = response.grounding_metadata().is_some(),
            "generateContent succeeded"
        );
        Ok(response)
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// `error.message` from a Google API error body, or the raw body.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    }
}
