//! Prompt assembly for report sections

use crate::core::scenario::Scenario;
use crate::report::entities::SectionResult;
use crate::report::section::SectionKind;
use crate::util::truncate_chars;

/// Only this many of the most recent sections are quoted as context
const CONTEXT_SECTIONS: usize = 2;

/// Characters of each prior section quoted as context
const CONTEXT_EXCERPT_CHARS: usize = 500;

/// Characters of the scenario body included in a prompt
const BODY_EXCERPT_CHARS: usize = 1500;

/// Minimal prompt used to check the model is reachable
pub const HANDSHAKE_PROMPT: &str = "Say 'OK' if you're working";

/// Templates for section prompts
pub struct ReportPromptTemplate;

impl ReportPromptTemplate {
    /// Fixed chain-of-thought block placed after the persona
    pub fn reasoning_instructions() -> &'static str {
        r#"REASONING INSTRUCTIONS:
You must use step-by-step reasoning to analyze this legal case. Structure your analysis as follows:
1. First, identify the key legal issues
2. Second, analyze the relevant facts
3. Third, apply legal principles
4. Finally, provide your conclusions

Think through each step carefully before moving to the next."#
    }

    /// Build the full prompt for one section.
    ///
    /// Layout: persona, reasoning block, context from the last two prior
    /// sections (if any), task header, scenario fields, body excerpt and the
    /// section instructions.
    pub fn build(
        persona: &str,
        kind: SectionKind,
        scenario: &Scenario,
        prior: &[SectionResult],
    ) -> String {
        let mut prompt = format!("{}\n\n{}", persona, Self::reasoning_instructions());

        if !prior.is_empty() {
            prompt.push_str("\n\nPREVIOUS ANALYSIS:\n");
            let start = prior.len().saturating_sub(CONTEXT_SECTIONS);
            for section in &prior[start..] {
                prompt.push_str(&format!(
                    "\n{}:\n{}...\n",
                    section.title,
                    truncate_chars(&section.content, CONTEXT_EXCERPT_CHARS)
                ));
            }
        }

        prompt.push_str(&format!(
            r#"

TASK: Provide a {} for the following legal case:

Case Name: {}
Case Type: {}
Key Issues: {}
Urgency: {}

Complaint Summary:
{}

{}"#,
            kind.human_name(),
            scenario.name,
            scenario.case_type,
            scenario.key_issues_joined(),
            scenario.urgency,
            truncate_chars(&scenario.body, BODY_EXCERPT_CHARS),
            kind.instructions()
        ));

        prompt
    }

    /// Persona for a retry after a low-quality attempt, carrying the feedback
    pub fn quality_retry_persona(persona: &str, feedback: &[String]) -> String {
        format!(
            "{}\n\nIMPORTANT: Previous attempt had quality issues. Please address: {}",
            persona,
            feedback.join("; ")
        )
    }
}
