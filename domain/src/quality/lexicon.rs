//! Fixed vocabularies used by the quality heuristics.
//!
//! All entries are lower-case; matching is a case-insensitive substring test
//! against the lower-cased content.

use crate::report::section::SectionKind;

/// Discourse markers that signal logical flow between statements
pub const LOGICAL_CONNECTORS: &[&str] = &[
    "therefore",
    "however",
    "furthermore",
    "moreover",
    "consequently",
    "additionally",
    "thus",
    "hence",
    "accordingly",
    "nevertheless",
    "nonetheless",
    "meanwhile",
    "subsequently",
    "alternatively",
    "specifically",
    "particularly",
    "notably",
    "indeed",
    "in fact",
    "for example",
    "for instance",
    "in addition",
    "on the other hand",
    "as a result",
    "in conclusion",
    "in summary",
    "overall",
];

/// Ordinal and sequencing markers that signal structured thinking
pub const STRUCTURE_MARKERS: &[&str] = &[
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "initially",
    "subsequently",
    "finally",
    "lastly",
    "next",
    "then",
    "afterward",
    "previously",
    "step 1",
    "step 2",
    "step 3",
    "1.",
    "2.",
    "3.",
    "4.",
    "5.",
    "one",
    "two",
    "three",
    "four",
    "five",
];

/// Phrases that tie a claim to evidence or reasoning
pub const REASONING_MARKERS: &[&str] = &[
    "based on",
    "because",
    "due to",
    "as a result",
    "according to",
    "evidence shows",
    "the evidence",
    "research indicates",
    "studies show",
    "data suggests",
    "analysis reveals",
    "findings indicate",
    "demonstrates",
    "establishes",
    "proves",
    "supports",
    "indicates",
    "suggests",
    "reveals",
    "shows that",
    "indicates that",
    "suggests that",
    "demonstrates that",
    "according to the",
    "in light of",
    "given that",
    "considering",
    "taking into account",
    "in view of",
    "on the basis of",
];

/// List markers checked verbatim (case-sensitive) in the content
pub const LIST_MARKERS: &[&str] = &["•", "-", "*", "1.", "2.", "3."];

/// Terms that indicate the section closes with a conclusion
pub const CONCLUSION_INDICATORS: &[&str] =
    &["conclusion", "summary", "therefore", "in summary", "overall"];

/// Domain vocabulary expected in each kind of section
pub fn section_keywords(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::LiabilityAssessment => &[
            "liability",
            "negligence",
            "breach",
            "duty",
            "causation",
            "fault",
            "responsibility",
            "obligation",
            "standard of care",
            "proximate cause",
            "tort",
            "wrongful",
            "violation",
            "infringement",
            "claim",
            "defendant",
            "plaintiff",
            "merit",
            "evidence",
            "precedent",
            "case law",
        ],
        SectionKind::DamageCalculation => &[
            "damages",
            "compensation",
            "calculation",
            "quantum",
            "loss",
            "injury",
            "harm",
            "economic loss",
            "lost profits",
            "punitive",
            "actual damages",
            "statutory damages",
            "restitution",
            "recovery",
            "award",
            "settlement",
            "monetary",
            "financial impact",
            "cost",
            "expense",
            "revenue",
        ],
        SectionKind::PriorArtAnalysis => &[
            "prior art",
            "patent",
            "novelty",
            "obviousness",
            "invention",
            "claims",
            "validity",
            "infringement",
            "patentability",
            "non-obvious",
            "prior",
            "existing",
            "publication",
            "disclosure",
            "freedom to operate",
            "f-to",
            "patent search",
            "art",
            "reference",
            "prior publication",
        ],
        SectionKind::CompetitiveLandscape => &[
            "competitors",
            "market share",
            "positioning",
            "competitive",
            "market",
            "industry",
            "rival",
            "competition",
            "advantage",
            "disadvantage",
            "market position",
            "market leader",
            "niche",
            "differentiation",
            "competitive advantage",
            "market analysis",
            "competitive analysis",
            "market dynamics",
            "market trends",
            "market size",
        ],
        SectionKind::RiskAssessment => &[
            "risk",
            "probability",
            "impact",
            "mitigation",
            "threat",
            "vulnerability",
            "exposure",
            "likelihood",
            "consequence",
            "severity",
            "uncertainty",
            "hazard",
            "peril",
            "danger",
            "challenge",
            "concern",
            "issue",
            "risk management",
            "risk analysis",
            "risk factor",
            "risk level",
        ],
        SectionKind::StrategicRecommendations => &[
            "recommendation",
            "strategy",
            "implementation",
            "action",
            "plan",
            "approach",
            "tactic",
            "initiative",
            "measure",
            "step",
            "course of action",
            "proposal",
            "suggestion",
            "guidance",
            "direction",
            "roadmap",
            "timeline",
            "milestone",
            "objective",
            "goal",
            "priority",
        ],
    }
}

/// Number of lexicon entries present in already lower-cased text
pub fn count_present(lowered: &str, lexicon: &[&str]) -> usize {
    lexicon.iter().filter(|term| lowered.contains(**term)).count()
}
