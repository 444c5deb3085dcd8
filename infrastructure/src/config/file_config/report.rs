//! Generation, pricing, report and logging configuration from TOML

use dossier_application::GenerationConfig;
use dossier_domain::Pricing;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[generation]` section: sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let defaults = GenerationConfig::default();
        Self {
            temperature: defaults.temperature,
            top_p: defaults.top_p,
            top_k: defaults.top_k,
            max_output_tokens: defaults.max_output_tokens,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

/// Raw `[pricing]` section: price per 1000 tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePricingConfig {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl Default for FilePricingConfig {
    fn default() -> Self {
        let defaults = Pricing::default();
        Self {
            input_per_1k: defaults.input_per_1k,
            output_per_1k: defaults.output_per_1k,
        }
    }
}

impl FilePricingConfig {
    pub fn to_pricing(&self) -> Pricing {
        Pricing::new(self.input_per_1k, self.output_per_1k)
    }
}

/// Raw `[report]` section: quality gate and retry budgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    pub quality_threshold: f64,
    pub max_quality_attempts: usize,
    pub max_generation_attempts: usize,
    pub backoff_base_ms: u64,
}

impl Default for FileReportConfig {
    fn default() -> Self {
        Self {
            quality_threshold: 0.7,
            max_quality_attempts: 3,
            max_generation_attempts: 3,
            backoff_base_ms: 1000,
        }
    }
}

/// Raw `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one line per generation event
    pub event_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults_match_application() {
        assert_eq!(
            FileGenerationConfig::default().to_generation_config(),
            GenerationConfig::default()
        );
        assert_eq!(FilePricingConfig::default().to_pricing(), Pricing::default());
    }

    #[test]
    fn test_report_section_deserialize() {
        let toml_str = r#"
[report]
quality_threshold = 0.8
backoff_base_ms = 250

[logging]
event_log = "logs/events.jsonl"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.report.quality_threshold, 0.8);
        assert_eq!(config.report.backoff_base_ms, 250);
        assert_eq!(config.report.max_quality_attempts, 3);
        assert_eq!(
            config.logging.event_log,
            Some(PathBuf::from("logs/events.jsonl"))
        );
    }
}
