//! Scenario files
//!
//! Scenarios are read from JSON or TOML files, chosen by extension.

mod loader;

pub use loader::{ScenarioFormat, ScenarioLoadError, ScenarioLoader};
