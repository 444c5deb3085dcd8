//! Quality domain
//!
//! Stateless heuristics that turn generated text into a [`QualityScore`]
//! plus feedback, and a [`QualityValidator`] that audits finished reports.

pub mod lexicon;
pub mod scorer;
pub mod text;
pub mod validator;

pub use scorer::{QualityScore, score};
pub use validator::{DEFAULT_QUALITY_THRESHOLD, QualityMetrics, QualityValidator, ReportValidation};
