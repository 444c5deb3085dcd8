//! Heuristic quality scoring for generated sections.
//!
//! [`score`] is a pure function of `(content, kind, expected_terms)`: the same
//! inputs always produce the same [`QualityScore`]. Every sub-score is the sum
//! of a few banded contributions, capped at 1.0.
//!
//! | Sub-score    | Weight | Signals                                                    |
//! |--------------|--------|------------------------------------------------------------|
//! | coherence    | 0.30   | paragraphs, connectors, ordinal markers, sentence count    |
//! | groundedness | 0.30   | section lexicon, reasoning markers, expected-term coverage |
//! | completeness | 0.25   | expected-term coverage, word count                         |
//! | structure    | 0.15   | paragraphs, lists, headings, sentence variety, conclusion  |

use super::lexicon::{
    CONCLUSION_INDICATORS, LIST_MARKERS, LOGICAL_CONNECTORS, REASONING_MARKERS,
    STRUCTURE_MARKERS, count_present, section_keywords,
};
use super::text::{has_heading_line, paragraphs, sentences, word_count};
use crate::report::section::SectionKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const COHERENCE_WEIGHT: f64 = 0.30;
pub const GROUNDEDNESS_WEIGHT: f64 = 0.30;
pub const COMPLETENESS_WEIGHT: f64 = 0.25;
pub const STRUCTURE_WEIGHT: f64 = 0.15;

/// Sub-scores below this produce an advisory feedback line
pub const FEEDBACK_THRESHOLD: f64 = 0.7;

/// Word count at which length stops contributing to completeness
const TARGET_WORDS: usize = 200;

/// Stems shorter than this never trigger the stemmed fallback
const MIN_STEM_CHARS: usize = 4;

/// Multi-dimensional quality score of one piece of generated text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub overall: f64,
    pub coherence: f64,
    pub groundedness: f64,
    pub completeness: f64,
    pub structure: f64,
    /// One advisory line per weak sub-score, in sub-score order
    #[serde(default)]
    pub feedback: Vec<String>,
}

impl QualityScore {
    /// Build a score from sub-scores, deriving the weighted overall value.
    ///
    /// Feedback is left empty; [`score`] fills it from the content.
    pub fn from_parts(coherence: f64, groundedness: f64, completeness: f64, structure: f64) -> Self {
        let overall = coherence * COHERENCE_WEIGHT
            + groundedness * GROUNDEDNESS_WEIGHT
            + completeness * COMPLETENESS_WEIGHT
            + structure * STRUCTURE_WEIGHT;
        Self {
            overall: overall.clamp(0.0, 1.0),
            coherence,
            groundedness,
            completeness,
            structure,
            feedback: Vec::new(),
        }
    }

    pub fn passes(&self, threshold: f64) -> bool {
        self.overall >= threshold
    }

    /// Feedback lines joined for re-prompting
    pub fn feedback_text(&self) -> String {
        self.feedback.join("; ")
    }
}

/// Score generated content for a section kind against the terms it must cover.
pub fn score(content: &str, kind: SectionKind, expected_terms: &[&str]) -> QualityScore {
    let coherence = coherence_score(content);
    let groundedness = groundedness_score(content, kind, expected_terms);
    let completeness = completeness_score(content, expected_terms);
    let structure = structure_score(content);

    let mut result = QualityScore::from_parts(coherence, groundedness, completeness, structure);
    result.feedback = feedback(&result, content, kind, expected_terms);
    result
}

/// Logical flow: paragraphing, connectors, ordinal markers and depth.
pub fn coherence_score(content: &str) -> f64 {
    let lowered = content.to_lowercase();

    let connectors = match count_present(&lowered, LOGICAL_CONNECTORS) {
        n if n >= 5 => 0.2,
        n if n >= 3 => 0.15,
        n if n >= 1 => 0.1,
        _ => 0.0,
    };

    let markers = match count_present(&lowered, STRUCTURE_MARKERS) {
        n if n >= 3 => 0.2,
        2 => 0.15,
        1 => 0.1,
        _ => 0.0,
    };

    let depth = match sentences(content).len() {
        n if n >= 12 => 0.3,
        n if n >= 8 => 0.25,
        n if n >= 5 => 0.15,
        n if n >= 3 => 0.1,
        _ => 0.0,
    };

    let total: f64 = paragraph_band(content) + connectors + markers + depth;
    total.min(1.0)
}

/// Evidence: domain vocabulary, reasoning markers and expected-term coverage.
pub fn groundedness_score(content: &str, kind: SectionKind, expected_terms: &[&str]) -> f64 {
    let lowered = content.to_lowercase();

    let keywords = section_keywords(kind);
    let keyword_coverage = count_present(&lowered, keywords) as f64 / keywords.len() as f64;
    let vocabulary = match keyword_coverage {
        c if c >= 0.5 => 0.4,
        c if c >= 0.3 => 0.3,
        c if c >= 0.2 => 0.2,
        c if c >= 0.1 => 0.1,
        _ => 0.0,
    };

    let reasoning = match count_present(&lowered, REASONING_MARKERS) {
        n if n >= 5 => 0.3,
        4 => 0.25,
        3 => 0.2,
        2 => 0.15,
        1 => 0.1,
        _ => 0.0,
    };

    let coverage = if expected_terms.is_empty() {
        0.0
    } else {
        let covered = expected_terms
            .iter()
            .filter(|term| covers_with_stem(&lowered, term))
            .count();
        match covered as f64 / expected_terms.len() as f64 {
            c if c >= 1.0 => 0.3,
            c if c >= 0.75 => 0.25,
            c if c >= 0.5 => 0.2,
            c if c >= 0.25 => 0.15,
            c if c > 0.0 => 0.1,
            _ => 0.0,
        }
    };

    let total: f64 = vocabulary + reasoning + coverage;
    total.min(1.0)
}

/// How fully the content addresses its expected terms, blended with length.
pub fn completeness_score(content: &str, expected_terms: &[&str]) -> f64 {
    let words = word_count(content);

    if expected_terms.is_empty() {
        return match words {
            n if n >= 200 => 1.0,
            n if n >= 100 => 0.7,
            n if n >= 50 => 0.5,
            _ => 0.3,
        };
    }

    let lowered = content.to_lowercase();
    let covered = expected_terms
        .iter()
        .filter(|term| lowered.contains(&term.to_lowercase()))
        .count();
    let coverage = covered as f64 / expected_terms.len() as f64;
    let length = (words as f64 / TARGET_WORDS as f64).min(1.0);

    coverage * 0.7 + length * 0.3
}

/// Presentation: paragraphs, lists, headings, sentence variety, conclusion.
pub fn structure_score(content: &str) -> f64 {
    let lists = if LIST_MARKERS.iter().any(|m| content.contains(*m)) {
        0.2
    } else {
        0.0
    };

    let headings = if has_heading_line(content) { 0.1 } else { 0.0 };

    let found = sentences(content);
    let distinct_lengths: HashSet<usize> = found.iter().map(|s| word_count(s)).collect();
    let variety = if found.len() >= 3 && distinct_lengths.len() >= 3 {
        0.2
    } else {
        0.0
    };

    let lowered = content.to_lowercase();
    let conclusion = if CONCLUSION_INDICATORS.iter().any(|c| lowered.contains(*c)) {
        0.2
    } else {
        0.0
    };

    let total: f64 = paragraph_band(content) + lists + headings + variety + conclusion;
    total.min(1.0)
}

fn paragraph_band(content: &str) -> f64 {
    match paragraphs(content).len() {
        n if n >= 3 => 0.3,
        2 => 0.2,
        1 => 0.1,
        _ => 0.0,
    }
}

/// Strip one trailing "ation", then "ing", then "s" (each only if present).
pub fn stem(term: &str) -> &str {
    let term = term.strip_suffix("ation").unwrap_or(term);
    let term = term.strip_suffix("ing").unwrap_or(term);
    term.strip_suffix('s').unwrap_or(term)
}

/// Case-insensitive containment, retrying with the stem when it is long enough.
///
/// `lowered` must already be lower-case.
pub fn covers_with_stem(lowered: &str, term: &str) -> bool {
    let term = term.to_lowercase();
    if lowered.contains(&term) {
        return true;
    }
    let root = stem(&term);
    root.chars().count() >= MIN_STEM_CHARS && lowered.contains(root)
}

fn feedback(
    result: &QualityScore,
    content: &str,
    kind: SectionKind,
    expected_terms: &[&str],
) -> Vec<String> {
    let lowered = content.to_lowercase();
    let mut feedback = Vec::new();

    if result.coherence < FEEDBACK_THRESHOLD {
        feedback.push("Improve logical flow and use more transition phrases".to_string());
    }

    if result.groundedness < FEEDBACK_THRESHOLD {
        let missing: Vec<&str> = expected_terms
            .iter()
            .copied()
            .filter(|term| !covers_with_stem(&lowered, term))
            .collect();
        let mut line = format!(
            "Include more {}-specific terminology and evidence",
            kind.human_name()
        );
        if !missing.is_empty() {
            line.push_str(&format!(" (missing: {})", missing.join(", ")));
        }
        feedback.push(line);
    }

    if result.completeness < FEEDBACK_THRESHOLD {
        let missing: Vec<&str> = expected_terms
            .iter()
            .copied()
            .filter(|term| !lowered.contains(&term.to_lowercase()))
            .collect();
        if missing.is_empty() {
            feedback.push(format!(
                "Expand the analysis to at least {} words",
                TARGET_WORDS
            ));
        } else {
            feedback.push(format!(
                "Address all expected elements: {}",
                missing.join(", ")
            ));
        }
    }

    if result.structure < FEEDBACK_THRESHOLD {
        feedback.push("Improve paragraph structure and organization".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_RISK_SECTION: &str = "# Risk Assessment

First, the primary legal risk is a finding of infringement. Based on the evidence shows that the defendant copied the design, the probability of an adverse ruling is high. Therefore, exposure to damages is significant because the accused product drives most of the revenue.

Second, business risks follow from the litigation itself. However, the likelihood of an injunction is moderate given that the plaintiff does not compete directly. Furthermore, the severity of reputational harm depends on press coverage, and the impact on partners remains an open concern.

- Legal risk: high probability, high impact
- Business risk: medium probability, high impact
- Reputational risk: low probability, medium impact

Finally, mitigation should start immediately. As a result of the analysis, we recommend a design-around program, an insurance review, and early settlement talks. Consequently the overall risk level can be reduced. The risk management plan demonstrates that uncertainty is manageable. In conclusion, the threat is serious but controllable with prompt action.";

    #[test]
    fn test_strong_section_scores_high() {
        let result = score(
            STRONG_RISK_SECTION,
            SectionKind::RiskAssessment,
            SectionKind::RiskAssessment.expected_terms(),
        );
        assert!(result.overall >= 0.7, "overall was {}", result.overall);
        assert!(result.coherence >= 0.9);
        assert!(result.groundedness >= 0.9);
        assert!(result.structure >= 0.9);
    }

    #[test]
    fn test_empty_content_scores_low_with_full_feedback() {
        let result = score("", SectionKind::LiabilityAssessment, &["claims", "evidence"]);
        assert_eq!(result.coherence, 0.0);
        assert_eq!(result.groundedness, 0.0);
        assert!((result.completeness - 0.0).abs() < 1e-12);
        assert_eq!(result.structure, 0.0);
        assert_eq!(result.overall, 0.0);
        assert_eq!(result.feedback.len(), 4);
    }

    #[test]
    fn test_scores_are_bounded() {
        let repeated = STRONG_RISK_SECTION.repeat(20);
        let samples: [&str; 5] = [
            "",
            "x",
            STRONG_RISK_SECTION,
            repeated.as_str(),
            "TITLE\n\n- a\n- b\n\n1. first 2. second 3. third\n\nIn summary, therefore, overall fine.",
        ];
        for sample in samples {
            for kind in SectionKind::PLAN {
                let result = score(sample, kind, kind.expected_terms());
                for value in [
                    result.overall,
                    result.coherence,
                    result.groundedness,
                    result.completeness,
                    result.structure,
                ] {
                    assert!((0.0..=1.0).contains(&value), "{value} out of range");
                }
            }
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let terms = SectionKind::RiskAssessment.expected_terms();
        let a = score(STRONG_RISK_SECTION, SectionKind::RiskAssessment, terms);
        let b = score(STRONG_RISK_SECTION, SectionKind::RiskAssessment, terms);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overall_is_weighted_sum() {
        let result = score(STRONG_RISK_SECTION, SectionKind::RiskAssessment, &[]);
        let expected = 0.30 * result.coherence
            + 0.30 * result.groundedness
            + 0.25 * result.completeness
            + 0.15 * result.structure;
        assert!((result.overall - expected).abs() < 1e-9);
    }

    #[test]
    fn test_stemmed_fallback_matches_root() {
        assert!(covers_with_stem("we recommend settling", "recommendation"));
        assert!(covers_with_stem("the filing deadline", "filings"));
    }

    #[test]
    fn test_stemmed_fallback_requires_four_char_root() {
        // "a" stems to itself and is too short for the fallback
        assert!(!covers_with_stem("nothing here to see", "a"));
        // "rating" -> "rat" is too short, so only the exact term counts
        assert!(!covers_with_stem("a rat ran", "rating"));
    }

    #[test]
    fn test_stem_strips_suffixes_in_order() {
        assert_eq!(stem("recommendation"), "recommend");
        assert_eq!(stem("findings"), "finding");
        assert_eq!(stem("hearing"), "hear");
        assert_eq!(stem("risks"), "risk");
        assert_eq!(stem("a"), "a");
    }

    #[test]
    fn test_groundedness_credits_stemmed_expected_term() {
        let with_root = groundedness_score("We recommend this.", SectionKind::RiskAssessment, &["recommendation"]);
        let without = groundedness_score("We advise this.", SectionKind::RiskAssessment, &["recommendation"]);
        assert!((with_root - without - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_completeness_without_terms_uses_word_bands() {
        let words = |n: usize| vec!["word"; n].join(" ");
        assert_eq!(completeness_score(&words(10), &[]), 0.3);
        assert_eq!(completeness_score(&words(50), &[]), 0.5);
        assert_eq!(completeness_score(&words(100), &[]), 0.7);
        assert_eq!(completeness_score(&words(200), &[]), 1.0);
    }

    #[test]
    fn test_completeness_blends_coverage_and_length() {
        let content = format!("claims evidence {}", vec!["filler"; 98].join(" "));
        let result = completeness_score(&content, &["claims", "evidence", "probability", "precedent"]);
        // coverage 0.5, length 100/200
        assert!((result - (0.5 * 0.7 + 0.5 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_completeness_does_not_use_stemming() {
        let result = completeness_score("we recommend", &["recommendation"]);
        assert!(result < 0.1);
    }

    #[test]
    fn test_keyword_coverage_is_monotonic() {
        let keywords = section_keywords(SectionKind::CompetitiveLandscape);
        let mut previous = 0.0;
        for n in 0..=keywords.len() {
            let content = keywords[..n].join(" ");
            let value = groundedness_score(&content, SectionKind::CompetitiveLandscape, &[]);
            assert!(value >= previous, "coverage {n} dropped to {value}");
            previous = value;
        }
    }

    #[test]
    fn test_expected_term_coverage_is_monotonic() {
        let terms = ["alpha", "bravo", "charlie", "delta"];
        let mut previous = 0.0;
        for n in 0..=terms.len() {
            let content = terms[..n].join(" ");
            let value = groundedness_score(&content, SectionKind::RiskAssessment, &terms);
            assert!(value >= previous);
            previous = value;
        }
        assert!((previous - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_feedback_echoes_missing_terms() {
        let result = score(
            "Short text about claims.",
            SectionKind::LiabilityAssessment,
            &["claims", "evidence", "precedent"],
        );
        let grounded = result
            .feedback
            .iter()
            .find(|f| f.contains("liability assessment-specific"))
            .unwrap();
        assert!(grounded.contains("evidence, precedent"));
        assert!(!grounded.contains("claims,"));
        assert!(
            result
                .feedback
                .contains(&"Address all expected elements: evidence, precedent".to_string())
        );
    }

    #[test]
    fn test_structure_signals() {
        let content = "OVERVIEW\n\nThe first point is made here clearly.\n\n- item one\n- item two\n\nThis sentence has quite a few more words in it than others. Short but valid one. In conclusion the matter is settled now.";
        let value = structure_score(content);
        // paragraphs 0.3 + list 0.2 + heading 0.1 + variety 0.2 + conclusion 0.2
        assert!((value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_parts_weights() {
        let result = QualityScore::from_parts(1.0, 0.0, 0.0, 0.0);
        assert!((result.overall - 0.3).abs() < 1e-12);
        assert!(result.passes(0.3));
        assert!(!result.passes(0.31));
    }
}
