//! Local file system scenario loader

use dossier_domain::{DomainError, Scenario};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a scenario file
#[derive(Error, Debug)]
pub enum ScenarioLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported scenario file extension for {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Serialization format of a scenario file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Json,
    Toml,
}

impl ScenarioFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Reads and validates scenario files
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario file and check that it has a name.
    pub fn load(path: impl AsRef<Path>) -> Result<Scenario, ScenarioLoadError> {
        let path = path.as_ref();
        let format = ScenarioFormat::from_path(path)
            .ok_or_else(|| ScenarioLoadError::UnsupportedFormat(path.to_path_buf()))?;
        let raw = fs::read_to_string(path).map_err(|source| ScenarioLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let scenario = Self::parse(&raw, format)?;
        debug!(
            "Loaded scenario '{}' from {} ({} key issues)",
            scenario.name,
            path.display(),
            scenario.key_issues.len()
        );
        Ok(scenario)
    }

    /// Parse and validate scenario text in the given format
    pub fn parse(raw: &str, format: ScenarioFormat) -> Result<Scenario, ScenarioLoadError> {
        let scenario: Scenario = match format {
            ScenarioFormat::Json => serde_json::from_str(raw)?,
            ScenarioFormat::Toml => toml::from_str(raw)?,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "name": "Acme v. Widget",
        "type": "Patent Infringement",
        "key_issues": ["infringement", "willfulness"],
        "urgency": "high",
        "body": "Acme alleges Widget's hinge infringes US Patent 9,123,456."
    }"#;

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.json");
        fs::write(&path, JSON).unwrap();

        let scenario = ScenarioLoader::load(&path).unwrap();

        assert_eq!(scenario.name, "Acme v. Widget");
        assert_eq!(scenario.case_type, "Patent Infringement");
        assert_eq!(scenario.key_issues.len(), 2);
    }

    #[test]
    fn test_load_toml_with_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.TOML");
        fs::write(
            &path,
            r#"
name = "Beta v. Gamma"
case_type = "Trade Secret"
urgency_level = "medium"
complaint_text = "Gamma hired Beta's engineers."
"#,
        )
        .unwrap();

        let scenario = ScenarioLoader::load(&path).unwrap();

        assert_eq!(scenario.case_type, "Trade Secret");
        assert_eq!(scenario.urgency, "medium");
        assert!(scenario.key_issues.is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ScenarioLoader::load("case.yaml").unwrap_err();
        assert!(matches!(err, ScenarioLoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ScenarioLoader::load("/nonexistent/case.json").unwrap_err();
        assert!(matches!(err, ScenarioLoadError::Io { .. }));
    }

    #[test]
    fn test_blank_body_accepted() {
        let raw = r#"{"name": "Case", "type": "Patent", "urgency": "low", "body": "  "}"#;
        let scenario = ScenarioLoader::parse(raw, ScenarioFormat::Json).unwrap();
        assert_eq!(scenario.name, "Case");
    }

    #[test]
    fn test_blank_name_rejected() {
        let raw = r#"{"name": " ", "type": "Patent", "urgency": "low", "body": "Body"}"#;
        let err = ScenarioLoader::parse(raw, ScenarioFormat::Json).unwrap_err();
        assert!(matches!(err, ScenarioLoadError::Invalid(_)));
    }
}
