//! Configuration issues reported by [`FileConfig::validate`](super::FileConfig::validate).

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: report generation cannot work with this value.
    Error,
    /// Non-fatal: generation works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key of the offending value, e.g. `report.quality_threshold`
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    pub fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }

    /// True when any issue is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
