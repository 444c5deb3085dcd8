//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown persona role: {role}. Available personas: {available}")]
    UnknownPersona { role: String, available: String },

    #[error("Unknown section kind: {0}")]
    UnknownSectionKind(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

impl DomainError {
    /// Check if this error is a failed persona lookup
    pub fn is_unknown_persona(&self) -> bool {
        matches!(self, DomainError::UnknownPersona { .. })
    }
}
