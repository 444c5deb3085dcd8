//! Model service configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};

/// Raw model service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Google Cloud project hosting the model
    pub project_id: String,
    /// Vertex AI region
    pub location: String,
    pub model_name: String,
    /// Full `generateContent` URL, overriding the one derived from the fields above
    pub endpoint: Option<String>,
    /// Environment variable holding the OAuth access token
    pub access_token_env: String,
    pub request_timeout_secs: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            location: "us-central1".to_string(),
            model_name: "gemini-2.0-flash".to_string(),
            endpoint: None,
            access_token_env: "VERTEX_ACCESS_TOKEN".to_string(),
            request_timeout_secs: 120,
        }
    }
}
