//! Section scoring port
//!
//! The orchestrator asks a [`SectionScorer`] to rate each generated section.
//! [`HeuristicScorer`] is the production implementation; tests script their
//! own scores.

use dossier_domain::quality::score;
use dossier_domain::{QualityScore, SectionKind};

/// Rates generated section content
pub trait SectionScorer: Send + Sync {
    fn score(&self, content: &str, kind: SectionKind) -> QualityScore;
}

/// Lexicon-based scorer using each kind's expected terms
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl SectionScorer for HeuristicScorer {
    fn score(&self, content: &str, kind: SectionKind) -> QualityScore {
        score(content, kind, kind.expected_terms())
    }
}
