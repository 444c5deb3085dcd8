//! Report parameters: quality gate and retry control.
//!
//! [`ReportParams`] groups the static parameters that control the quality
//! loop in [`GenerateReportUseCase`](crate::use_cases::generate_report::GenerateReportUseCase)
//! and the retry loop in [`SectionGenerator`](crate::use_cases::generate_section::SectionGenerator).

use crate::ports::text_model::GenerationConfig;
use dossier_domain::{DEFAULT_QUALITY_THRESHOLD, Pricing};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quality gate and retry parameters.
///
/// | Loop | Budget | Retries on |
/// |------|--------|------------|
/// | Quality | `max_quality_attempts` | score below `quality_threshold` |
/// | Generation | `max_generation_attempts` | empty output, missing usage, model errors |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportParams {
    /// Minimum overall score for a section to be accepted outright.
    pub quality_threshold: f64,
    /// Generate-and-score attempts per section.
    pub max_quality_attempts: usize,
    /// Model calls per generation before giving up.
    pub max_generation_attempts: usize,
    /// Backoff after failed attempt `i` is `2^i * backoff_base`.
    pub backoff_base: Duration,
    /// Sampling parameters sent to the model.
    pub generation: GenerationConfig,
    /// Token pricing used for cost accounting.
    pub pricing: Pricing,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            quality_threshold: DEFAULT_QUALITY_THRESHOLD,
            max_quality_attempts: 3,
            max_generation_attempts: 3,
            backoff_base: Duration::from_secs(1),
            generation: GenerationConfig::default(),
            pricing: Pricing::default(),
        }
    }
}

impl ReportParams {
    // ==================== Builder Methods ====================

    pub fn with_quality_threshold(mut self, threshold: f64) -> Self {
        self.quality_threshold = threshold;
        self
    }

    pub fn with_max_quality_attempts(mut self, max: usize) -> Self {
        self.max_quality_attempts = max;
        self
    }

    pub fn with_max_generation_attempts(mut self, max: usize) -> Self {
        self.max_generation_attempts = max;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// Delay before retrying after the failed attempt with index `attempt_index`.
    pub fn backoff_for(&self, attempt_index: usize) -> Duration {
        let factor = 1u32.checked_shl(attempt_index as u32).unwrap_or(u32::MAX);
        self.backoff_base.saturating_mul(factor)
    }
}
