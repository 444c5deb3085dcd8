//! Section catalogue: the closed set of section kinds and persona roles.
//!
//! Every per-kind lookup (title, persona, instructions, expected terms) is an
//! exhaustive `match`, so adding a kind fails to compile until each table
//! has an entry for it.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Persona role that authors a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaRole {
    BusinessAnalyst,
    MarketResearcher,
    StrategicConsultant,
}

impl PersonaRole {
    pub const ALL: [PersonaRole; 3] = [
        PersonaRole::BusinessAnalyst,
        PersonaRole::MarketResearcher,
        PersonaRole::StrategicConsultant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaRole::BusinessAnalyst => "business_analyst",
            PersonaRole::MarketResearcher => "market_researcher",
            PersonaRole::StrategicConsultant => "strategic_consultant",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaRole::BusinessAnalyst => "Business Analyst",
            PersonaRole::MarketResearcher => "Market Researcher",
            PersonaRole::StrategicConsultant => "Strategic Consultant",
        }
    }
}

impl std::fmt::Display for PersonaRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonaRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPersona {
                role: s.to_string(),
                available: PersonaRole::ALL
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Kind of report section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    LiabilityAssessment,
    DamageCalculation,
    PriorArtAnalysis,
    CompetitiveLandscape,
    RiskAssessment,
    StrategicRecommendations,
}

impl SectionKind {
    /// Generation order of a report. Later sections read earlier ones as context.
    pub const PLAN: [SectionKind; 6] = [
        SectionKind::LiabilityAssessment,
        SectionKind::DamageCalculation,
        SectionKind::PriorArtAnalysis,
        SectionKind::CompetitiveLandscape,
        SectionKind::RiskAssessment,
        SectionKind::StrategicRecommendations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::LiabilityAssessment => "liability_assessment",
            SectionKind::DamageCalculation => "damage_calculation",
            SectionKind::PriorArtAnalysis => "prior_art_analysis",
            SectionKind::CompetitiveLandscape => "competitive_landscape",
            SectionKind::RiskAssessment => "risk_assessment",
            SectionKind::StrategicRecommendations => "strategic_recommendations",
        }
    }

    /// Lower-case, space separated name used in task headers
    pub fn human_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::LiabilityAssessment => "Liability Assessment",
            SectionKind::DamageCalculation => "Damage Calculation",
            SectionKind::PriorArtAnalysis => "Prior Art Analysis",
            SectionKind::CompetitiveLandscape => "Competitive Landscape",
            SectionKind::RiskAssessment => "Risk Assessment",
            SectionKind::StrategicRecommendations => "Strategic Recommendations",
        }
    }

    /// Persona that writes this section
    pub fn persona_role(&self) -> PersonaRole {
        match self {
            SectionKind::LiabilityAssessment | SectionKind::DamageCalculation => {
                PersonaRole::BusinessAnalyst
            }
            SectionKind::PriorArtAnalysis | SectionKind::CompetitiveLandscape => {
                PersonaRole::MarketResearcher
            }
            SectionKind::RiskAssessment | SectionKind::StrategicRecommendations => {
                PersonaRole::StrategicConsultant
            }
        }
    }

    /// Task-specific instructions appended to the end of a section prompt
    pub fn instructions(&self) -> &'static str {
        match self {
            SectionKind::LiabilityAssessment => {
                "Analyze liability by:
- Identifying each potential claim
- Evaluating strength of evidence
- Assessing probability of success (use percentages)
- Citing relevant precedents or legal principles
"
            }
            SectionKind::DamageCalculation => {
                "Calculate potential damages by:
- Identifying categories of damages (actual, statutory, punitive)
- Providing specific dollar ranges
- Explaining calculation methodology
- Considering mitigation factors
"
            }
            SectionKind::PriorArtAnalysis => {
                "Analyze prior art and precedents by:
- Identifying relevant existing patents/IP
- Assessing validity challenges
- Evaluating obviousness arguments
- Determining freedom to operate
"
            }
            SectionKind::CompetitiveLandscape => {
                "Analyze competitive implications by:
- Identifying key competitors affected
- Assessing market position changes
- Evaluating licensing opportunities
- Predicting competitor responses
"
            }
            SectionKind::RiskAssessment => {
                "Assess risks by:
- Identifying legal risks (probability and impact)
- Evaluating business risks
- Analyzing reputational risks
- Providing risk mitigation strategies
"
            }
            SectionKind::StrategicRecommendations => {
                "Provide strategic recommendations by:
- Outlining 3-5 specific action items
- Prioritizing by impact and urgency
- Estimating resource requirements
- Defining success metrics
"
            }
        }
    }

    /// Terms the orchestrator requires a generated section to cover
    pub fn expected_terms(&self) -> &'static [&'static str] {
        match self {
            SectionKind::LiabilityAssessment => &["claims", "evidence", "probability", "precedent"],
            SectionKind::DamageCalculation => &["damages", "calculation", "amount", "methodology"],
            SectionKind::PriorArtAnalysis => &["patents", "prior art", "validity", "obviousness"],
            SectionKind::CompetitiveLandscape => &["competitors", "market", "position", "licensing"],
            SectionKind::RiskAssessment => &["risks", "probability", "impact", "mitigation"],
            SectionKind::StrategicRecommendations => {
                &["recommendations", "action", "timeline", "resources"]
            }
        }
    }

    /// Terms used when re-validating a finished report
    ///
    /// Deliberately distinct from [`SectionKind::expected_terms`]: report
    /// validation audits vocabulary the generation loop does not steer on.
    pub fn validation_terms(&self) -> &'static [&'static str] {
        match self {
            SectionKind::LiabilityAssessment => &["liability", "breach", "duty", "causation"],
            SectionKind::DamageCalculation => &["damages", "calculation", "compensation", "quantum"],
            SectionKind::PriorArtAnalysis => &["prior art", "patent", "novelty", "claims"],
            SectionKind::CompetitiveLandscape => {
                &["competitors", "market", "positioning", "advantage"]
            }
            SectionKind::RiskAssessment => &["risk", "probability", "impact", "mitigation"],
            SectionKind::StrategicRecommendations => {
                &["recommendation", "strategy", "implementation", "timeline"]
            }
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::PLAN
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSectionKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_order_and_personas() {
        let plan: Vec<(&str, &str)> = SectionKind::PLAN
            .iter()
            .map(|k| (k.as_str(), k.persona_role().as_str()))
            .collect();
        assert_eq!(
            plan,
            vec![
                ("liability_assessment", "business_analyst"),
                ("damage_calculation", "business_analyst"),
                ("prior_art_analysis", "market_researcher"),
                ("competitive_landscape", "market_researcher"),
                ("risk_assessment", "strategic_consultant"),
                ("strategic_recommendations", "strategic_consultant"),
            ]
        );
    }

    #[test]
    fn test_section_kind_roundtrip() {
        for kind in SectionKind::PLAN {
            let parsed: SectionKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_section_kind() {
        let err = "closing_argument".parse::<SectionKind>().unwrap_err();
        assert_eq!(err, DomainError::UnknownSectionKind("closing_argument".to_string()));
    }

    #[test]
    fn test_unknown_persona_lists_available_roles() {
        let err = "paralegal".parse::<PersonaRole>().unwrap_err();
        assert!(err.is_unknown_persona());
        assert!(err.to_string().contains("market_researcher"));
    }

    #[test]
    fn test_human_name() {
        assert_eq!(SectionKind::PriorArtAnalysis.human_name(), "prior art analysis");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&SectionKind::RiskAssessment).unwrap();
        assert_eq!(json, "\"risk_assessment\"");
        let role: PersonaRole = serde_json::from_str("\"strategic_consultant\"").unwrap();
        assert_eq!(role, PersonaRole::StrategicConsultant);
    }
}
