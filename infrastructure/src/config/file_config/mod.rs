//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

mod model;
mod report;

pub use model::FileModelConfig;
pub use report::{FileGenerationConfig, FileLoggingConfig, FilePricingConfig, FileReportConfig};

use super::issue::ConfigIssue;
use dossier_application::ReportParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model service connection
    pub model: FileModelConfig,
    /// Sampling parameters
    pub generation: FileGenerationConfig,
    /// Token pricing
    pub pricing: FilePricingConfig,
    /// Quality gate and retry budgets
    pub report: FileReportConfig,
    /// Generation event log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(0.0..=1.0).contains(&self.report.quality_threshold) {
            issues.push(ConfigIssue::error(
                "report.quality_threshold",
                format!(
                    "must be between 0 and 1, got {}",
                    self.report.quality_threshold
                ),
            ));
        }
        if self.report.max_quality_attempts == 0 {
            issues.push(ConfigIssue::error(
                "report.max_quality_attempts",
                "must be at least 1",
            ));
        }
        if self.report.max_generation_attempts == 0 {
            issues.push(ConfigIssue::error(
                "report.max_generation_attempts",
                "must be at least 1",
            ));
        }
        if self.model.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "model.request_timeout_secs",
                "cannot be 0",
            ));
        }
        if self.model.project_id.trim().is_empty() && self.model.endpoint.is_none() {
            issues.push(ConfigIssue::warning(
                "model.project_id",
                "is empty; set it (or model.endpoint) before generating reports",
            ));
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            issues.push(ConfigIssue::warning(
                "generation.temperature",
                format!(
                    "{} is outside the usual 0-2 range",
                    self.generation.temperature
                ),
            ));
        }

        issues
    }

    /// Runtime parameters for the report use case
    pub fn to_report_params(&self) -> ReportParams {
        ReportParams::default()
            .with_quality_threshold(self.report.quality_threshold)
            .with_max_quality_attempts(self.report.max_quality_attempts)
            .with_max_generation_attempts(self.report.max_generation_attempts)
            .with_backoff_base(Duration::from_millis(self.report.backoff_base_ms))
            .with_generation(self.generation.to_generation_config())
            .with_pricing(self.pricing.to_pricing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::issue::Severity;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
project_id = "acme-legal"
model_name = "gemini-2.0-pro"

[generation]
temperature = 0.3
max_output_tokens = 4096

[pricing]
input_per_1k = 0.0005

[report]
quality_threshold = 0.75
max_quality_attempts = 2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.model_name, "gemini-2.0-pro");
        assert_eq!(config.generation.temperature, 0.3);
        assert_eq!(config.generation.top_k, 40);
        assert_eq!(config.pricing.input_per_1k, 0.0005);
        assert_eq!(config.pricing.output_per_1k, 0.00125);

        let params = config.to_report_params();
        assert_eq!(params.quality_threshold, 0.75);
        assert_eq!(params.max_quality_attempts, 2);
        assert_eq!(params.generation.max_output_tokens, 4096);
        assert_eq!(params.backoff_base, Duration::from_secs(1));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.model.location, "us-central1");
        assert_eq!(config.report.quality_threshold, 0.7);
        assert!(config.logging.event_log.is_none());
    }

    #[test]
    fn test_validate_default_warns_about_project() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "model.project_id");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_validate_rejects_bad_budgets() {
        let mut config = FileConfig::default();
        config.model.project_id = "acme".to_string();
        config.report.quality_threshold = 1.5;
        config.report.max_generation_attempts = 0;

        let issues = config.validate();
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec!["report.quality_threshold", "report.max_generation_attempts"]
        );
        assert!(ConfigIssue::has_errors(&issues));
    }
}
