//! Progress notification port
//!
//! Defines the interface for reporting progress during report generation.

use dossier_domain::{QualityScore, Report, SectionKind, SectionResult};

/// Callback for progress updates during report generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait ReportProgressNotifier: Send + Sync {
    /// Called once before the first section
    fn on_report_start(&self, scenario_name: &str, total_sections: usize);

    /// Called when work on a section begins
    fn on_section_start(&self, kind: SectionKind, index: usize, total: usize);

    /// Called before each quality attempt of a section
    fn on_section_attempt(&self, _kind: SectionKind, _attempt: usize, _max_attempts: usize) {}

    /// Called after each attempt has been scored
    fn on_section_scored(&self, _kind: SectionKind, _attempt: usize, _quality: &QualityScore) {}

    /// Called when a section has been accepted
    fn on_section_complete(&self, section: &SectionResult);

    /// Called when the report has been assembled
    fn on_report_complete(&self, _report: &Report) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ReportProgressNotifier for NoProgress {
    fn on_report_start(&self, _scenario_name: &str, _total_sections: usize) {}
    fn on_section_start(&self, _kind: SectionKind, _index: usize, _total: usize) {}
    fn on_section_complete(&self, _section: &SectionResult) {}
}
