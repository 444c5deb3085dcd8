//! Generate Report use case
//!
//! Orchestrates the full report flow: every section of the fixed plan is
//! generated, scored and, when it falls below the quality threshold,
//! regenerated with the scorer's feedback appended to the persona.

use crate::config::ReportParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::progress::{NoProgress, ReportProgressNotifier};
use crate::ports::scorer::{HeuristicScorer, SectionScorer};
use crate::ports::text_model::TextModel;
use crate::use_cases::generate_section::{
    GeneratedSection, GenerationError, GenerationStats, SectionGenerator,
};
use dossier_domain::{
    BuiltinPersonas, DomainError, PersonaStore, QualityScore, Report, ReportPromptTemplate,
    Scenario, SectionKind, SectionResult,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Section generator not initialized; run the handshake first")]
    Uninitialized,

    #[error("Invalid scenario: {0}")]
    InvalidScenario(DomainError),

    #[error("Persona lookup failed: {0}")]
    Persona(DomainError),

    #[error("Failed to generate section {kind}: {source}")]
    SectionGeneration {
        kind: SectionKind,
        #[source]
        source: GenerationError,
    },
}

/// States of the per-section quality loop
enum QualityState {
    Generating { attempt: usize, persona: String },
    Scoring {
        attempt: usize,
        persona: String,
        generated: GeneratedSection,
    },
    Retrying {
        attempt: usize,
        persona: String,
        feedback: Vec<String>,
    },
    Accepted(SectionResult),
    Failed(GenerationError),
}

/// Use case for generating a complete report
pub struct GenerateReportUseCase<M: TextModel + 'static> {
    generator: SectionGenerator<M>,
    personas: Arc<dyn PersonaStore>,
    scorer: Arc<dyn SectionScorer>,
    logger: Arc<dyn GenerationLogger>,
    params: ReportParams,
}

impl<M: TextModel + 'static> GenerateReportUseCase<M> {
    pub fn new(model: Arc<M>, params: ReportParams) -> Self {
        Self {
            generator: SectionGenerator::new(model, params.clone()),
            personas: Arc::new(BuiltinPersonas),
            scorer: Arc::new(HeuristicScorer),
            logger: Arc::new(NoGenerationLogger),
            params,
        }
    }

    pub fn with_personas(mut self, personas: Arc<dyn PersonaStore>) -> Self {
        self.personas = personas;
        self
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn SectionScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.generator = self.generator.with_logger(Arc::clone(&logger));
        self.logger = logger;
        self
    }

    /// Run the model handshake
    pub async fn initialize(&mut self) -> Result<(), GenerationError> {
        self.generator.initialize().await
    }

    pub fn is_initialized(&self) -> bool {
        self.generator.is_initialized()
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    /// Usage statistics of the underlying section generator
    pub fn stats(&self) -> GenerationStats {
        self.generator.stats()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&mut self, scenario: Scenario) -> Result<Report, ReportError> {
        self.execute_with_progress(scenario, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &mut self,
        scenario: Scenario,
        progress: &dyn ReportProgressNotifier,
    ) -> Result<Report, ReportError> {
        if !self.generator.is_initialized() {
            return Err(ReportError::Uninitialized);
        }
        scenario.validate().map_err(ReportError::InvalidScenario)?;

        let start = Instant::now();
        let total = SectionKind::PLAN.len();
        info!("Generating report for {} ({} sections)", scenario.name, total);
        progress.on_report_start(&scenario.name, total);

        let mut sections: Vec<SectionResult> = Vec::with_capacity(total);
        for (index, kind) in SectionKind::PLAN.into_iter().enumerate() {
            progress.on_section_start(kind, index, total);
            let section = self
                .produce_section(kind, &scenario, &sections, progress)
                .await?;
            progress.on_section_complete(&section);
            sections.push(section);
        }

        let report = Report::assemble(scenario, sections, start.elapsed());
        info!(
            confidence = report.confidence_score,
            total_tokens = report.total_tokens,
            "Report completed in {:.1}s (cost ${:.4})",
            report.processing_time_secs,
            report.total_cost
        );
        self.logger.log(GenerationEvent::new(
            "report_completed",
            json!({
                "scenario": report.scenario.name,
                "sections": report.sections.len(),
                "confidence": report.confidence_score,
                "total_cost": report.total_cost,
                "total_tokens": report.total_tokens,
                "processing_time_secs": report.processing_time_secs,
            }),
        ));
        progress.on_report_complete(&report);

        Ok(report)
    }

    /// Run the quality loop for one section
    async fn produce_section(
        &mut self,
        kind: SectionKind,
        scenario: &Scenario,
        prior: &[SectionResult],
        progress: &dyn ReportProgressNotifier,
    ) -> Result<SectionResult, ReportError> {
        let persona = self
            .personas
            .persona(kind.persona_role())
            .map_err(ReportError::Persona)?;
        let max_attempts = self.params.max_quality_attempts.max(1);
        let threshold = self.params.quality_threshold;

        let mut state = QualityState::Generating {
            attempt: 1,
            persona,
        };

        loop {
            state = match state {
                QualityState::Generating { attempt, persona } => {
                    progress.on_section_attempt(kind, attempt, max_attempts);
                    match self.generator.generate(&persona, kind, scenario, prior).await {
                        Ok(generated) => QualityState::Scoring {
                            attempt,
                            persona,
                            generated,
                        },
                        Err(e) => QualityState::Failed(e),
                    }
                }
                QualityState::Scoring {
                    attempt,
                    persona,
                    generated,
                } => {
                    let quality = self.scorer.score(&generated.content, kind);
                    info!(section = %kind, attempt, score = quality.overall, "Section scored");
                    progress.on_section_scored(kind, attempt, &quality);
                    self.logger.log(GenerationEvent::new(
                        "section_scored",
                        json!({
                            "section": kind.as_str(),
                            "attempt": attempt,
                            "overall": quality.overall,
                            "coherence": quality.coherence,
                            "groundedness": quality.groundedness,
                            "completeness": quality.completeness,
                            "structure": quality.structure,
                            "feedback": quality.feedback,
                        }),
                    ));

                    if quality.passes(threshold) {
                        info!(section = %kind, attempt, "Section passed quality validation");
                        QualityState::Accepted(self.accept(kind, attempt, generated, quality))
                    } else if attempt < max_attempts {
                        warn!(
                            section = %kind,
                            attempt,
                            score = quality.overall,
                            "Quality below threshold {:.2}, retrying ({}/{})",
                            threshold,
                            attempt + 1,
                            max_attempts
                        );
                        QualityState::Retrying {
                            attempt,
                            persona,
                            feedback: quality.feedback,
                        }
                    } else {
                        warn!(
                            section = %kind,
                            score = quality.overall,
                            "Quality still below threshold after {} attempts, accepting",
                            max_attempts
                        );
                        QualityState::Accepted(self.accept(kind, attempt, generated, quality))
                    }
                }
                QualityState::Retrying {
                    attempt,
                    persona,
                    feedback,
                } => QualityState::Generating {
                    attempt: attempt + 1,
                    persona: ReportPromptTemplate::quality_retry_persona(&persona, &feedback),
                },
                QualityState::Accepted(section) => return Ok(section),
                QualityState::Failed(source) => {
                    warn!(section = %kind, "Aborting report: {}", source);
                    return Err(ReportError::SectionGeneration { kind, source });
                }
            };
        }
    }

    fn accept(
        &self,
        kind: SectionKind,
        attempt: usize,
        generated: GeneratedSection,
        quality: QualityScore,
    ) -> SectionResult {
        self.logger.log(GenerationEvent::new(
            "section_accepted",
            json!({
                "section": kind.as_str(),
                "attempt": attempt,
                "score": quality.overall,
                "passed": quality.passes(self.params.quality_threshold),
                "total_tokens": generated.usage.total_tokens,
                "cost": generated.cost,
                "processing_time_secs": generated.processing_time.as_secs_f64(),
            }),
        ));
        SectionResult::new(kind, generated.content, quality, generated.usage, generated.cost)
    }
}
