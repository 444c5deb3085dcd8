//! Report-level validation.
//!
//! Re-scores every section of a finished report against the validation
//! vocabulary of its kind and keeps a short history for trend metrics.

use super::scorer::score;
use crate::report::entities::Report;
use crate::report::section::SectionKind;
use serde::{Deserialize, Serialize};

/// Default acceptance threshold for sections and reports
pub const DEFAULT_QUALITY_THRESHOLD: f64 = 0.7;

/// Only this many recommendations are kept in a validation result
const MAX_RECOMMENDATIONS: usize = 5;

/// Metrics are computed over this many most recent validations
const RECENT_WINDOW: usize = 10;

/// Outcome of validating a whole report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportValidation {
    pub overall_score: f64,
    pub passed: bool,
    /// Per-section overall scores, in report order
    pub section_scores: Vec<(SectionKind, f64)>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Summary of recent validations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub total_validations: usize,
    pub recent_average_score: f64,
    pub recent_pass_rate: f64,
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy)]
struct ValidationRecord {
    overall_score: f64,
    passed: bool,
}

/// Validates finished reports and tracks how they trend
#[derive(Debug, Clone)]
pub struct QualityValidator {
    threshold: f64,
    history: Vec<ValidationRecord>,
}

impl Default for QualityValidator {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY_THRESHOLD)
    }
}

impl QualityValidator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            history: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Re-score each section and record the result in the history.
    pub fn validate_report(&mut self, report: &Report) -> ReportValidation {
        let mut section_scores = Vec::with_capacity(report.sections.len());
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        for section in &report.sections {
            let quality = score(
                &section.content,
                section.kind,
                section.kind.validation_terms(),
            );
            section_scores.push((section.kind, quality.overall));

            if quality.overall < self.threshold {
                issues.push(format!(
                    "{}: Score {:.2} below threshold",
                    section.title, quality.overall
                ));
                recommendations.extend(quality.feedback);
            }
        }

        let overall_score = if section_scores.is_empty() {
            0.0
        } else {
            section_scores.iter().map(|(_, s)| s).sum::<f64>() / section_scores.len() as f64
        };
        let passed = overall_score >= self.threshold;

        self.history.push(ValidationRecord {
            overall_score,
            passed,
        });

        recommendations.truncate(MAX_RECOMMENDATIONS);

        ReportValidation {
            overall_score,
            passed,
            section_scores,
            issues,
            recommendations,
        }
    }

    /// Metrics over the most recent validations, `None` before the first one.
    pub fn quality_metrics(&self) -> Option<QualityMetrics> {
        if self.history.is_empty() {
            return None;
        }
        let recent = &self.history[self.history.len().saturating_sub(RECENT_WINDOW)..];
        let count = recent.len() as f64;

        Some(QualityMetrics {
            total_validations: self.history.len(),
            recent_average_score: recent.iter().map(|r| r.overall_score).sum::<f64>() / count,
            recent_pass_rate: recent.iter().filter(|r| r.passed).count() as f64 / count,
            threshold: self.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scenario::Scenario;
    use crate::quality::QualityScore;
    use crate::report::entities::SectionResult;
    use crate::report::usage::TokenUsage;
    use std::time::Duration;

    fn report_with(contents: &[(SectionKind, &str)]) -> Report {
        let sections = contents
            .iter()
            .map(|(kind, content)| {
                SectionResult::new(
                    *kind,
                    *content,
                    QualityScore::from_parts(0.0, 0.0, 0.0, 0.0),
                    TokenUsage::default(),
                    0.0,
                )
            })
            .collect();
        Report::assemble(
            Scenario::new("Case", "Patent", vec![], "low", "Body"),
            sections,
            Duration::ZERO,
        )
    }

    #[test]
    fn test_weak_sections_produce_issues() {
        let mut validator = QualityValidator::default();
        let report = report_with(&[
            (SectionKind::LiabilityAssessment, "Too thin."),
            (SectionKind::RiskAssessment, "Also thin."),
        ]);

        let result = validator.validate_report(&report);

        assert!(!result.passed);
        assert_eq!(result.section_scores.len(), 2);
        assert_eq!(result.section_scores[0].0, SectionKind::LiabilityAssessment);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].starts_with("Liability Assessment: Score 0."));
        assert!(result.recommendations.len() <= 5);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_empty_report_scores_zero() {
        let mut validator = QualityValidator::default();
        let result = validator.validate_report(&report_with(&[]));
        assert_eq!(result.overall_score, 0.0);
        assert!(!result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_metrics_track_history() {
        let mut validator = QualityValidator::new(0.0);
        assert!(validator.quality_metrics().is_none());

        let report = report_with(&[(SectionKind::RiskAssessment, "Thin.")]);
        for _ in 0..12 {
            validator.validate_report(&report);
        }

        let metrics = validator.quality_metrics().unwrap();
        assert_eq!(metrics.total_validations, 12);
        assert_eq!(metrics.recent_pass_rate, 1.0);
        assert_eq!(metrics.threshold, 0.0);
    }
}
