//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for generated reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every section with its quality scores, then the executive summary
    Full,
    /// Only the executive summary and totals
    Summary,
    /// The complete report as JSON
    Json,
}

/// CLI arguments for dossier
#[derive(Parser, Debug)]
#[command(name = "dossier")]
#[command(author, version, about = "Quality-gated multi-section analysis reports")]
#[command(long_about = r#"
Dossier writes a six-section analysis report for a case scenario. Each
section is written by an expert persona, scored for coherence,
groundedness, completeness and structure, and regenerated with feedback
until it passes the quality threshold.

Sections, in order:
  Liability Assessment, Damage Calculation      (business analyst)
  Prior Art Analysis, Competitive Landscape     (market researcher)
  Risk Assessment, Strategic Recommendations    (strategic consultant)

Configuration files are loaded from (in priority order):
1. DOSSIER_<SECTION>__<KEY>   Environment variables
2. --config <path>            Explicit config file
3. ./dossier.toml             Project-level config
4. ~/.config/dossier/config.toml   Global config

Example:
  dossier generate case.json
  dossier generate case.toml -o json --out-file report.json
  dossier validate report.json older-report.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators and statistics
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a report for a scenario file (.json or .toml)
    Generate(GenerateArgs),

    /// Run the model handshake and report whether the model is reachable
    Check,

    /// Re-score reports previously saved with `-o json`
    Validate {
        /// Paths to JSON reports
        #[arg(required = true)]
        reports: Vec<PathBuf>,
    },

    /// List the built-in personas and their validation scores
    Personas {
        /// Print the full text of one persona (e.g. business_analyst)
        #[arg(long, value_name = "ROLE")]
        show: Option<String>,
    },

    /// Show configuration file locations and the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Scenario file (.json or .toml)
    pub scenario: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out_file: Option<PathBuf>,

    /// Override the quality threshold from the config
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Append generation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,
}
