//! Configuration file loading for dossier
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DOSSIER_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./dossier.toml` or `./.dossier.toml`
//! 4. Global: `$XDG_CONFIG_HOME/dossier/config.toml`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileLoggingConfig, FileModelConfig, FilePricingConfig,
    FileReportConfig,
};
pub use issue::{ConfigIssue, Severity};
pub use loader::ConfigLoader;
