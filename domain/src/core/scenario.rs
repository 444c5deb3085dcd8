//! Scenario value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The case a report is generated for (Value Object)
///
/// The body may be arbitrarily long; prompts only ever carry a bounded
/// prefix of it (see [`crate::prompt::ReportPromptTemplate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable case name
    pub name: String,
    /// Case category, e.g. "Patent Infringement"
    #[serde(rename = "type", alias = "case_type")]
    pub case_type: String,
    /// Key issues in the order they should be considered
    #[serde(default)]
    pub key_issues: Vec<String>,
    /// Urgency label, e.g. "high"
    #[serde(alias = "urgency_level")]
    pub urgency: String,
    /// Free-text description of the case (complaint, brief, notes)
    #[serde(alias = "complaint_text")]
    pub body: String,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        case_type: impl Into<String>,
        key_issues: Vec<String>,
        urgency: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            case_type: case_type.into(),
            key_issues,
            urgency: urgency.into(),
            body: body.into(),
        }
    }

    /// Check that the scenario can be identified. The body is free text and may be empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidScenario(
                "scenario name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Key issues joined for display in prompts and summaries
    pub fn key_issues_joined(&self) -> String {
        self.key_issues.join(", ")
    }
}
