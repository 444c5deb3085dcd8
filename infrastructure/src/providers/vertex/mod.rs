//! Vertex AI provider
//!
//! Gemini models served through the Vertex AI `generateContent` REST API,
//! authenticated with an OAuth access token.

mod adapter;
mod types;

pub use adapter::{VertexSettings, VertexTextModel, generate_content_url};
