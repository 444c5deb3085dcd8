//! Generate Section use case
//!
//! Wraps one model call per section with transient-failure retry,
//! exponential backoff, token accounting and cost.

use crate::config::ReportParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::text_model::{ModelError, TextModel};
use dossier_domain::{
    HANDSHAKE_PROMPT, ReportPromptTemplate, Scenario, SectionKind, SectionResult, TokenUsage,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Why a single generation attempt failed. Always retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransientFailure {
    #[error("Empty or missing text in model response")]
    EmptyOutput,

    #[error("Missing usage metadata in model response")]
    MissingUsage,

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors that can occur during section generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Section generator not initialized; run the handshake first")]
    Uninitialized,

    #[error("Handshake failed: {0}")]
    Handshake(TransientFailure),

    #[error("Generation failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: usize,
        #[source]
        last: TransientFailure,
    },
}

/// Content, usage and cost of one successful generation
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSection {
    pub content: String,
    pub usage: TokenUsage,
    pub cost: f64,
    /// Wall time including failed attempts and backoff
    pub processing_time: Duration,
}

/// Usage and reliability statistics for one generator instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub total_tokens: u64,
    pub average_tokens_per_request: f64,
    /// Successful generations
    pub request_count: u64,
    pub average_processing_time_secs: f64,
    /// Successes over attempts, 0 before any attempt
    pub success_rate: f64,
}

#[derive(Debug, Default)]
struct Counters {
    attempts: u64,
    successes: u64,
    input_tokens: u64,
    output_tokens: u64,
    total_tokens: u64,
    processing: Duration,
}

/// Generator for individual report sections
///
/// Counters are owned by the instance; independent reports should use
/// independent generators.
pub struct SectionGenerator<M: TextModel + 'static> {
    model: Arc<M>,
    params: ReportParams,
    max_attempts: usize,
    initialized: bool,
    counters: Counters,
    logger: Arc<dyn GenerationLogger>,
}

impl<M: TextModel + 'static> SectionGenerator<M> {
    pub fn new(model: Arc<M>, params: ReportParams) -> Self {
        Self {
            model,
            max_attempts: params.max_generation_attempts.max(1),
            params,
            initialized: false,
            counters: Counters::default(),
            logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Send the minimal handshake prompt; the generator is usable only
    /// after this succeeds with non-empty text.
    pub async fn initialize(&mut self) -> Result<(), GenerationError> {
        info!("Initializing section generator with model {}", self.model.model_name());
        let config = self.params.generation.for_handshake();

        let outcome = match self.model.generate(HANDSHAKE_PROMPT, &config).await {
            Ok(output) => match output.text {
                Some(text) if !text.is_empty() => Ok(()),
                _ => Err(TransientFailure::EmptyOutput),
            },
            Err(e) => Err(TransientFailure::Model(e)),
        };

        self.initialized = outcome.is_ok();
        match outcome {
            Ok(()) => {
                info!("Model handshake succeeded");
                Ok(())
            }
            Err(failure) => {
                error!("Model handshake failed: {}", failure);
                Err(GenerationError::Handshake(failure))
            }
        }
    }

    /// Generate content for one section.
    ///
    /// Builds the prompt from the persona, scenario and prior sections, then
    /// calls the model up to the configured number of attempts.
    pub async fn generate(
        &mut self,
        persona: &str,
        kind: SectionKind,
        scenario: &Scenario,
        prior: &[SectionResult],
    ) -> Result<GeneratedSection, GenerationError> {
        if !self.initialized {
            return Err(GenerationError::Uninitialized);
        }

        let prompt = ReportPromptTemplate::build(persona, kind, scenario, prior);
        let start = tokio::time::Instant::now();
        let mut last_failure = TransientFailure::EmptyOutput;

        for attempt_index in 0..self.max_attempts {
            let attempt = attempt_index + 1;
            self.counters.attempts += 1;
            self.logger.log(GenerationEvent::new(
                "generation_attempt",
                json!({
                    "section": kind.as_str(),
                    "attempt": attempt,
                    "prompt_chars": prompt.chars().count(),
                }),
            ));

            match self.attempt(&prompt).await {
                Ok((content, usage)) => {
                    let cost = self.params.pricing.cost(&usage);
                    let processing_time = start.elapsed();
                    self.record_success(&usage, processing_time);

                    info!(section = %kind, attempt, "Generated section content");
                    debug!(
                        section = %kind,
                        input_tokens = usage.input_tokens,
                        output_tokens = usage.output_tokens,
                        total_tokens = usage.total_tokens,
                        "Cost: ${:.4}",
                        cost
                    );

                    return Ok(GeneratedSection {
                        content,
                        usage,
                        cost,
                        processing_time,
                    });
                }
                Err(failure) => {
                    self.logger.log(GenerationEvent::new(
                        "generation_failed",
                        json!({
                            "section": kind.as_str(),
                            "attempt": attempt,
                            "error": failure.to_string(),
                        }),
                    ));

                    if attempt < self.max_attempts {
                        let wait = self.params.backoff_for(attempt_index);
                        warn!(
                            section = %kind,
                            attempt,
                            max_attempts = self.max_attempts,
                            "Generation failed: {}. Retrying in {:?}",
                            failure,
                            wait
                        );
                        tokio::time::sleep(wait).await;
                    } else {
                        error!(
                            section = %kind,
                            attempt,
                            "Generation failed after {} attempts: {}",
                            self.max_attempts,
                            failure
                        );
                    }
                    last_failure = failure;
                }
            }
        }

        Err(GenerationError::Exhausted {
            attempts: self.max_attempts,
            last: last_failure,
        })
    }

    /// Statistics across every call made by this generator
    pub fn stats(&self) -> GenerationStats {
        let c = &self.counters;
        let (average_tokens_per_request, average_processing_time_secs) = if c.successes == 0 {
            (0.0, 0.0)
        } else {
            (
                c.total_tokens as f64 / c.successes as f64,
                c.processing.as_secs_f64() / c.successes as f64,
            )
        };
        let success_rate = if c.attempts == 0 {
            0.0
        } else {
            c.successes as f64 / c.attempts as f64
        };

        GenerationStats {
            total_input_tokens: c.input_tokens,
            total_output_tokens: c.output_tokens,
            total_tokens: c.total_tokens,
            average_tokens_per_request,
            request_count: c.successes,
            average_processing_time_secs,
            success_rate,
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<(String, TokenUsage), TransientFailure> {
        let output = self.model.generate(prompt, &self.params.generation).await?;

        let content = match output.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(TransientFailure::EmptyOutput),
        };
        let usage = output.usage.ok_or(TransientFailure::MissingUsage)?;

        Ok((
            content,
            TokenUsage::with_reported_total(
                usage.prompt_token_count,
                usage.candidates_token_count,
                usage.total_token_count,
            ),
        ))
    }

    fn record_success(&mut self, usage: &TokenUsage, processing_time: Duration) {
        let c = &mut self.counters;
        c.successes += 1;
        c.input_tokens += usage.input_tokens;
        c.output_tokens += usage.output_tokens;
        c.total_tokens += usage.total_tokens;
        c.processing += processing_time;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::text_model::{GenerationConfig, ModelOutput, UsageMetadata};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted reply for one model call
    #[derive(Clone)]
    pub(crate) enum ScriptedReply {
        Text(String),
        NoText,
        NoUsage,
        Error(ModelError),
    }

    /// Mock model that replays scripted replies and records prompts
    pub(crate) struct ScriptedModel {
        replies: Mutex<VecDeque<ScriptedReply>>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        pub(crate) fn new(replies: Vec<ScriptedReply>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// A model that answers the handshake and then each section with `text`
        pub(crate) fn answering(text: &str, sections: usize) -> Self {
            let mut replies = vec![ScriptedReply::Text("OK".to_string())];
            replies.extend((0..sections).map(|_| ScriptedReply::Text(text.to_string())));
            Self::new(replies)
        }

        pub(crate) fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextModel for ScriptedModel {
        async fn generate(
            &self,
            prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<ModelOutput, ModelError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(ScriptedReply::Error(ModelError::RequestFailed(
                    "script exhausted".to_string(),
                )));
            let usage = UsageMetadata {
                prompt_token_count: 1000,
                candidates_token_count: 1000,
                total_token_count: None,
            };
            match reply {
                ScriptedReply::Text(text) => Ok(ModelOutput::new(text, usage)),
                ScriptedReply::NoText => Ok(ModelOutput {
                    text: None,
                    usage: Some(usage),
                }),
                ScriptedReply::NoUsage => Ok(ModelOutput {
                    text: Some("content".to_string()),
                    usage: None,
                }),
                ScriptedReply::Error(e) => Err(e),
            }
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    /// Logger that records event types
    pub(crate) struct RecordingLogger {
        pub(crate) events: Mutex<Vec<&'static str>>,
    }

    impl RecordingLogger {
        pub(crate) fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn count(&self, event_type: &str) -> usize {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| **e == event_type)
                .count()
        }
    }

    impl GenerationLogger for RecordingLogger {
        fn log(&self, event: GenerationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    pub(crate) fn fast_params() -> ReportParams {
        ReportParams::default().with_backoff_base(Duration::ZERO)
    }

    pub(crate) fn scenario() -> Scenario {
        Scenario::new(
            "Acme v. Widget",
            "Patent Infringement",
            vec!["infringement".to_string()],
            "high",
            "Acme alleges Widget copied its patented hinge.",
        )
    }

    async fn initialized(replies: Vec<ScriptedReply>) -> SectionGenerator<ScriptedModel> {
        let mut all = vec![ScriptedReply::Text("OK".to_string())];
        all.extend(replies);
        let mut generator = SectionGenerator::new(Arc::new(ScriptedModel::new(all)), fast_params());
        generator.initialize().await.unwrap();
        generator
    }

    #[tokio::test]
    async fn test_generate_requires_handshake() {
        let model = Arc::new(ScriptedModel::new(vec![]));
        let mut generator = SectionGenerator::new(Arc::clone(&model), fast_params());

        let err = generator
            .generate("Persona", SectionKind::RiskAssessment, &scenario(), &[])
            .await
            .unwrap_err();

        assert_eq!(err, GenerationError::Uninitialized);
        assert_eq!(model.call_count(), 0);
        assert_eq!(generator.stats().success_rate, 0.0);
    }

    #[tokio::test]
    async fn test_handshake_uses_minimal_prompt() {
        let model = Arc::new(ScriptedModel::new(vec![ScriptedReply::Text("OK".to_string())]));
        let mut generator = SectionGenerator::new(Arc::clone(&model), fast_params());

        generator.initialize().await.unwrap();

        assert!(generator.is_initialized());
        assert_eq!(model.prompts.lock().unwrap()[0], HANDSHAKE_PROMPT);
    }

    #[tokio::test]
    async fn test_failed_handshake_clears_initialized() {
        let model = Arc::new(ScriptedModel::new(vec![
            ScriptedReply::Text("OK".to_string()),
            ScriptedReply::NoText,
        ]));
        let mut generator = SectionGenerator::new(model, fast_params());

        generator.initialize().await.unwrap();
        let err = generator.initialize().await.unwrap_err();

        assert_eq!(err, GenerationError::Handshake(TransientFailure::EmptyOutput));
        assert!(!generator.is_initialized());
    }

    #[tokio::test]
    async fn test_success_computes_cost() {
        let mut generator = initialized(vec![ScriptedReply::Text("Analysis".to_string())]).await;

        let generated = generator
            .generate("Persona", SectionKind::LiabilityAssessment, &scenario(), &[])
            .await
            .unwrap();

        assert_eq!(generated.content, "Analysis");
        assert_eq!(generated.usage, TokenUsage::new(1000, 1000));
        assert!((generated.cost - 0.0015).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let logger = Arc::new(RecordingLogger::new());
        let mut generator = initialized(vec![
            ScriptedReply::NoText,
            ScriptedReply::Error(ModelError::Timeout),
            ScriptedReply::Text("Analysis".to_string()),
        ])
        .await
        .with_logger(logger.clone());

        let generated = generator
            .generate("Persona", SectionKind::DamageCalculation, &scenario(), &[])
            .await
            .unwrap();

        assert_eq!(generated.content, "Analysis");
        assert_eq!(logger.count("generation_attempt"), 3);
        assert_eq!(logger.count("generation_failed"), 2);

        let stats = generator.stats();
        assert_eq!(stats.request_count, 1);
        assert!((stats.success_rate - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.total_tokens, 2000);
    }

    #[tokio::test]
    async fn test_exhaustion_wraps_last_failure() {
        let mut generator = initialized(vec![
            ScriptedReply::NoText,
            ScriptedReply::Error(ModelError::Timeout),
            ScriptedReply::NoUsage,
        ])
        .await;

        let err = generator
            .generate("Persona", SectionKind::PriorArtAnalysis, &scenario(), &[])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Exhausted {
                attempts: 3,
                last: TransientFailure::MissingUsage,
            }
        );
        let stats = generator.stats();
        assert_eq!(stats.request_count, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.average_tokens_per_request, 0.0);
    }

    #[tokio::test]
    async fn test_only_empty_text_is_retried() {
        let model = Arc::new(ScriptedModel::new(vec![
            ScriptedReply::Text("OK".to_string()),
            ScriptedReply::Text(String::new()),
            ScriptedReply::Text("  \n".to_string()),
        ]));
        let mut generator = SectionGenerator::new(Arc::clone(&model), fast_params());
        generator.initialize().await.unwrap();

        let generated = generator
            .generate("Persona", SectionKind::RiskAssessment, &scenario(), &[])
            .await
            .unwrap();

        assert_eq!(generated.content, "  \n");
        assert_eq!(model.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_doubles_between_attempts() {
        let model = Arc::new(ScriptedModel::new(vec![
            ScriptedReply::Text("OK".to_string()),
            ScriptedReply::NoText,
            ScriptedReply::NoText,
            ScriptedReply::NoText,
        ]));
        let mut generator = SectionGenerator::new(model, ReportParams::default());
        generator.initialize().await.unwrap();

        let start = tokio::time::Instant::now();
        let err = generator
            .generate("Persona", SectionKind::RiskAssessment, &scenario(), &[])
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Exhausted { attempts: 3, .. }));
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_processing_time_includes_backoff() {
        let model = Arc::new(ScriptedModel::new(vec![
            ScriptedReply::Text("OK".to_string()),
            ScriptedReply::Error(ModelError::Timeout),
            ScriptedReply::NoUsage,
            ScriptedReply::Text("Analysis".to_string()),
        ]));
        let mut generator = SectionGenerator::new(model, ReportParams::default());
        generator.initialize().await.unwrap();

        let generated = generator
            .generate("Persona", SectionKind::DamageCalculation, &scenario(), &[])
            .await
            .unwrap();

        assert_eq!(generated.processing_time, Duration::from_secs(3));
        assert!((generator.stats().average_processing_time_secs - 3.0).abs() < 1e-9);
    }
}
