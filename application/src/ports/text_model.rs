//! Text model port
//!
//! Defines the interface for calling a generative text model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while calling the model service
///
/// Every variant is treated as transient by the section generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

impl GenerationConfig {
    /// Output limit for the initialization handshake
    pub const HANDSHAKE_MAX_OUTPUT_TOKENS: u32 = 10;

    /// Same sampling parameters with the small handshake output limit
    pub fn for_handshake(&self) -> Self {
        Self {
            max_output_tokens: Self::HANDSHAKE_MAX_OUTPUT_TOKENS,
            ..*self
        }
    }
}

/// Token counts as reported by the model service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub prompt_token_count: u64,
    pub candidates_token_count: u64,
    /// Authoritative total when the service reports one
    pub total_token_count: Option<u64>,
}

/// Raw model output. Either part may be missing on a malformed response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelOutput {
    pub text: Option<String>,
    pub usage: Option<UsageMetadata>,
}

impl ModelOutput {
    pub fn new(text: impl Into<String>, usage: UsageMetadata) -> Self {
        Self {
            text: Some(text.into()),
            usage: Some(usage),
        }
    }
}

/// Stateless text generation capability
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate text for a prompt
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<ModelOutput, ModelError>;

    /// Model identifier, for logs and display
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sampling_parameters() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.top_k, 40);
        assert_eq!(config.max_output_tokens, 2048);
    }

    #[test]
    fn test_handshake_config_keeps_sampling() {
        let config = GenerationConfig {
            temperature: 0.2,
            ..Default::default()
        };
        let handshake = config.for_handshake();
        assert_eq!(handshake.max_output_tokens, 10);
        assert_eq!(handshake.temperature, 0.2);
    }
}
