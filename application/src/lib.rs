//! Application layer for dossier
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ReportParams;
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    progress::{NoProgress, ReportProgressNotifier},
    scorer::{HeuristicScorer, SectionScorer},
    text_model::{GenerationConfig, ModelError, ModelOutput, TextModel, UsageMetadata},
};
pub use use_cases::generate_report::{GenerateReportUseCase, ReportError};
pub use use_cases::generate_section::{
    GeneratedSection, GenerationError, GenerationStats, SectionGenerator, TransientFailure,
};
