//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["dossier.toml", ".dossier.toml"];

/// Prefix of environment variable overrides (`DOSSIER_REPORT__QUALITY_THRESHOLD`)
const ENV_PREFIX: &str = "DOSSIER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `DOSSIER_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./dossier.toml` or `./.dossier.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/dossier/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path (`<config dir>/dossier/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dossier").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Config sources in priority order, with whether each file exists
    pub fn config_sources(explicit: Option<&PathBuf>) -> Vec<(String, Option<PathBuf>, bool)> {
        let mut sources = Vec::new();
        if let Some(path) = explicit {
            sources.push(("Explicit".to_string(), Some(path.clone()), path.exists()));
        }
        match Self::project_config_path() {
            Some(path) => sources.push(("Project".to_string(), Some(path), true)),
            None => sources.push(("Project".to_string(), None, false)),
        }
        if let Some(path) = Self::global_config_path() {
            let exists = path.exists();
            sources.push(("Global".to_string(), Some(path), exists));
        }
        sources
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] Environment: {}<SECTION>__<KEY>", ENV_PREFIX);

        for (label, path, exists) in Self::config_sources(explicit) {
            let marker = if exists { "FOUND" } else { "     " };
            match path {
                Some(path) => println!("  [{}] {}: {}", marker, label, path.display()),
                None => println!(
                    "  [{}] {}: ./{} or ./{}",
                    marker, label, PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
                ),
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
