//! Output formatter trait

use dossier_domain::Report;

/// Trait for rendering finished reports
pub trait ReportFormatter {
    /// Every section with its scores, then the executive summary
    fn format(&self, report: &Report) -> String;

    /// The complete report as JSON
    fn format_json(&self, report: &Report) -> String;

    /// Executive summary and totals only
    fn format_summary(&self, report: &Report) -> String;
}
