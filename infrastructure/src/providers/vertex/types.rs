//! Wire types for the Vertex AI `generateContent` REST call
//!
//! Only the fields the text model port needs are modelled; unknown response
//! fields are ignored.

use dossier_application::{GenerationConfig, ModelOutput, UsageMetadata};
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl<'a> GenerateContentRequest<'a> {
    /// Single-turn user request
    pub fn new(prompt: &'a str, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: WireGenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
                top_k: config.top_k,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<WireUsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    pub total_token_count: Option<u64>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() { None } else { Some(text) }
    }

    pub fn into_output(self) -> ModelOutput {
        ModelOutput {
            text: self.text(),
            usage: self.usage_metadata.map(|u| UsageMetadata {
                prompt_token_count: u.prompt_token_count,
                candidates_token_count: u.candidates_token_count,
                total_token_count: u.total_token_count,
            }),
        }
    }
}
