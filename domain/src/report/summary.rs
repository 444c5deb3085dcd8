//! Deterministic report roll-ups: confidence and executive summary

use super::entities::SectionResult;
use crate::core::scenario::Scenario;
use crate::quality::text::paragraphs;
use crate::util::truncate_chars;

/// Paragraphs at or below this length are skipped when summarising
const MIN_SUMMARY_PARAGRAPH_CHARS: usize = 50;

/// Each section contributes at most this many characters
const MAX_SUMMARY_EXCERPT_CHARS: usize = 200;

/// Mean section quality, or 0 when there are no sections
pub fn confidence_score(sections: &[SectionResult]) -> f64 {
    if sections.is_empty() {
        return 0.0;
    }
    sections.iter().map(SectionResult::quality_score).sum::<f64>() / sections.len() as f64
}

/// Build the executive summary from the first substantive paragraph of
/// each section, followed by confidence, issue count and urgency.
pub fn executive_summary(scenario: &Scenario, sections: &[SectionResult]) -> String {
    let mut summary = format!("EXECUTIVE SUMMARY - {}\n", scenario.name);
    summary.push_str(&"=".repeat(50));
    summary.push_str("\n\n");

    for section in sections {
        let lead = paragraphs(&section.content)
            .into_iter()
            .find(|p| p.chars().count() > MIN_SUMMARY_PARAGRAPH_CHARS);
        if let Some(lead) = lead {
            summary.push_str(&format!(
                "{}:\n{}...\n\n",
                section.title,
                truncate_chars(lead, MAX_SUMMARY_EXCERPT_CHARS)
            ));
        }
    }

    summary.push_str(&format!(
        "Overall Confidence: {:.1}%\n",
        confidence_score(sections) * 100.0
    ));
    summary.push_str(&format!(
        "Key Issues Identified: {}\n",
        scenario.key_issues.len()
    ));
    summary.push_str(&format!("Urgency Level: {}\n", scenario.urgency));
    summary
}
