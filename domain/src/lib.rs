//! Domain layer for dossier
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Report
//!
//! A [`Report`] is a fixed sequence of [`SectionResult`]s, each written by an
//! expert persona and accepted only after passing the quality gate.
//!
//! ## Quality
//!
//! - **Section scoring**: coherence, groundedness, completeness and structure
//!   heuristics combined into one [`QualityScore`]
//! - **Report validation**: [`QualityValidator`] re-scores a finished report

pub mod core;
pub mod prompt;
pub mod quality;
pub mod report;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, scenario::Scenario};
pub use prompt::{
    BuiltinPersonas, HANDSHAKE_PROMPT, PersonaStore, PersonaValidation, ReportPromptTemplate,
    validate_persona,
};
pub use quality::{
    DEFAULT_QUALITY_THRESHOLD, QualityMetrics, QualityScore, QualityValidator, ReportValidation,
};
pub use report::{
    entities::{Report, SectionResult},
    section::{PersonaRole, SectionKind},
    summary::{confidence_score, executive_summary},
    usage::{Pricing, TokenUsage},
};
