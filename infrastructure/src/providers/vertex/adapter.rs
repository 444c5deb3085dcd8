//! Vertex AI text model adapter
//!
//! Implements the [`TextModel`] port over the Vertex AI REST
//! `generateContent` endpoint. Retries are left to the section generator;
//! every failure is reported once as a [`ModelError`].

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::FileModelConfig;
use async_trait::async_trait;
use dossier_application::{GenerationConfig, ModelError, ModelOutput, TextModel};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Connect timeout for the model endpoint
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest error body echoed back in a [`ModelError`]
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Connection settings for one Vertex AI model
#[derive(Debug, Clone)]
pub struct VertexSettings {
    pub endpoint: String,
    pub model_name: String,
    pub access_token: String,
    pub request_timeout: Duration,
}

impl VertexSettings {
    /// Resolve settings from the `[model]` config section.
    ///
    /// The access token is read from the environment variable named by
    /// `access_token_env`.
    pub fn from_config(config: &FileModelConfig) -> Result<Self, ModelError> {
        let access_token = std::env::var(&config.access_token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ModelError::Authentication(format!(
                    "environment variable {} is not set",
                    config.access_token_env
                ))
            })?;
        Self::with_token(config, access_token)
    }

    /// Resolve settings with an explicit access token
    pub fn with_token(
        config: &FileModelConfig,
        access_token: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let endpoint = match &config.endpoint {
            Some(endpoint) => endpoint.clone(),
            None if config.project_id.trim().is_empty() => {
                return Err(ModelError::Connection(
                    "model.project_id is not configured".to_string(),
                ));
            }
            None => generate_content_url(&config.project_id, &config.location, &config.model_name),
        };

        Ok(Self {
            endpoint,
            model_name: config.model_name.clone(),
            access_token: access_token.into(),
            request_timeout: Duration::from_secs(config.request_timeout_secs.max(1)),
        })
    }
}

/// Regional `generateContent` URL for a publisher model
pub fn generate_content_url(project_id: &str, location: &str, model_name: &str) -> String {
    format!(
        "https://{location}-aiplatform.googleapis.com/v1/projects/{project_id}/locations/{location}/publishers/google/models/{model_name}:generateContent"
    )
}

/// Text model backed by Vertex AI
pub struct VertexTextModel {
    client: Client,
    settings: VertexSettings,
}

impl VertexTextModel {
    pub fn new(settings: VertexSettings) -> Result<Self, ModelError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| ModelError::Connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, settings })
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }
}

#[async_trait]
impl TextModel for VertexTextModel {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<ModelOutput, ModelError> {
        let request = GenerateContentRequest::new(prompt, config);

        debug!(
            model = %self.settings.model_name,
            prompt_chars = prompt.chars().count(),
            max_output_tokens = config.max_output_tokens,
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.access_token)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        Ok(parsed.into_output())
    }

    fn model_name(&self) -> &str {
        &self.settings.model_name
    }
}

fn map_transport_error(e: reqwest::Error) -> ModelError {
    if e.is_timeout() {
        ModelError::Timeout
    } else if e.is_connect() {
        ModelError::Connection(e.to_string())
    } else {
        ModelError::RequestFailed(e.to_string())
    }
}

/// Map a non-success HTTP status to a port error
fn map_status(status: StatusCode, body: &str) -> ModelError {
    let detail: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ModelError::Authentication(format!("{}: {}", status, detail))
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ModelError::Timeout,
        _ => ModelError::RequestFailed(format!("{}: {}", status, detail)),
    }
}
