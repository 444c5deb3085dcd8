//! Infrastructure layer for dossier
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration and scenario file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod scenario;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGenerationConfig, FileLoggingConfig,
    FileModelConfig, FilePricingConfig, FileReportConfig, Severity,
};
pub use logging::JsonlGenerationLogger;
pub use providers::vertex::{VertexSettings, VertexTextModel};
pub use scenario::{ScenarioFormat, ScenarioLoadError, ScenarioLoader};
