//! Report entities.
//!
//! A [`Report`] owns its [`SectionResult`]s in generation order. Neither type
//! is mutated after construction; the orchestrator only ever builds new
//! values.

use super::section::{PersonaRole, SectionKind};
use super::summary::{confidence_score, executive_summary};
use super::usage::TokenUsage;
use crate::core::scenario::Scenario;
use crate::quality::QualityScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// One accepted section of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionResult {
    pub kind: SectionKind,
    pub title: String,
    pub content: String,
    /// Persona that wrote the section
    pub role: PersonaRole,
    /// Score snapshot of the accepted content
    pub quality: QualityScore,
    pub usage: TokenUsage,
    pub cost: f64,
    pub created_at: DateTime<Utc>,
}

impl SectionResult {
    pub fn new(
        kind: SectionKind,
        content: impl Into<String>,
        quality: QualityScore,
        usage: TokenUsage,
        cost: f64,
    ) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            content: content.into(),
            role: kind.persona_role(),
            quality,
            usage,
            cost,
            created_at: Utc::now(),
        }
    }

    /// Overall quality score of the accepted content
    pub fn quality_score(&self) -> f64 {
        self.quality.overall
    }
}

/// A finished, scored report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub scenario: Scenario,
    /// Sections in generation order
    pub sections: Vec<SectionResult>,
    pub executive_summary: String,
    pub total_cost: f64,
    pub total_tokens: u64,
    pub processing_time_secs: f64,
    /// Mean of the section quality scores (0 when there are none)
    pub confidence_score: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl Report {
    /// Assemble a report from its accepted sections.
    ///
    /// Derives the aggregate cost, tokens, confidence, executive summary and
    /// the `sections_generated` / `average_quality` / `generation_time`
    /// metadata entries.
    pub fn assemble(scenario: Scenario, sections: Vec<SectionResult>, elapsed: Duration) -> Self {
        let confidence = confidence_score(&sections);
        let summary = executive_summary(&scenario, &sections);
        let total_cost = sections.iter().map(|s| s.cost).sum();
        let total_tokens = sections.iter().map(|s| s.usage.total_tokens).sum();
        let processing_time_secs = elapsed.as_secs_f64();

        let mut metadata = BTreeMap::new();
        metadata.insert(
            "sections_generated".to_string(),
            Value::from(sections.len()),
        );
        metadata.insert("average_quality".to_string(), Value::from(confidence));
        metadata.insert(
            "generation_time".to_string(),
            Value::from(processing_time_secs),
        );

        Self {
            scenario,
            sections,
            executive_summary: summary,
            total_cost,
            total_tokens,
            processing_time_secs,
            confidence_score: confidence,
            created_at: Utc::now(),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(kind: SectionKind, overall: f64, tokens: u64, cost: f64) -> SectionResult {
        let mut quality = QualityScore::from_parts(0.0, 0.0, 0.0, 0.0);
        quality.overall = overall;
        SectionResult::new(
            kind,
            "A paragraph of analysis that is comfortably longer than fifty characters.",
            quality,
            TokenUsage::new(tokens / 2, tokens - tokens / 2),
            cost,
        )
    }

    fn scenario() -> Scenario {
        Scenario::new("Case", "Patent", vec!["a".to_string()], "low", "Body")
    }

    #[test]
    fn test_section_result_derives_title_and_role() {
        let s = section(SectionKind::CompetitiveLandscape, 0.8, 10, 0.0);
        assert_eq!(s.title, "Competitive Landscape");
        assert_eq!(s.role, PersonaRole::MarketResearcher);
        assert_eq!(s.quality_score(), 0.8);
    }

    #[test]
    fn test_assemble_aggregates() {
        let sections = vec![
            section(SectionKind::LiabilityAssessment, 0.8, 100, 0.01),
            section(SectionKind::DamageCalculation, 0.6, 50, 0.02),
        ];
        let report = Report::assemble(scenario(), sections, Duration::from_millis(1500));

        assert_eq!(report.total_tokens, 150);
        assert!((report.total_cost - 0.03).abs() < 1e-12);
        assert!((report.confidence_score - 0.7).abs() < 1e-12);
        assert_eq!(report.processing_time_secs, 1.5);
        assert_eq!(report.metadata["sections_generated"], 2);
        assert_eq!(report.metadata["generation_time"], 1.5);
        assert_eq!(report.sections[1].kind, SectionKind::DamageCalculation);
    }

    #[test]
    fn test_assemble_empty_has_zero_confidence() {
        let report = Report::assemble(scenario(), Vec::new(), Duration::ZERO);
        assert_eq!(report.confidence_score, 0.0);
        assert_eq!(report.total_tokens, 0);
        assert_eq!(report.metadata["sections_generated"], 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = Report::assemble(
            scenario(),
            vec![section(SectionKind::RiskAssessment, 0.9, 10, 0.0)],
            Duration::ZERO,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sections"][0]["kind"], "risk_assessment");
        assert_eq!(json["sections"][0]["role"], "strategic_consultant");
        assert_eq!(json["scenario"]["type"], "Patent");
    }
}
