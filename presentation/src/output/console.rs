//! Console output formatter for reports

use crate::cli::commands::OutputFormat;
use crate::output::formatter::ReportFormatter;
use colored::Colorize;
use dossier_application::GenerationStats;
use dossier_domain::{
    PersonaRole, PersonaValidation, QualityMetrics, QualityScore, Report, ReportValidation,
};

/// Formats reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a report in the requested format
    pub fn render(report: &Report, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Summary => Self::format_summary(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format the complete report
    pub fn format(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Dossier Report"));
        output.push('\n');
        output.push_str(&Self::scenario_block(report));

        for (index, section) in report.sections.iter().enumerate() {
            output.push_str(&Self::section_header(&format!(
                "{}. {}",
                index + 1,
                section.title
            )));
            output.push_str(&format!(
                "{} {}   {}\n\n",
                "Author:".dimmed(),
                section.role.display_name(),
                Self::score_line(&section.quality)
            ));
            output.push_str(section.content.trim_end());
            output.push('\n');
        }

        output.push_str(&Self::section_header("Executive Summary"));
        output.push('\n');
        output.push_str(&report.executive_summary);
        output.push('\n');

        output.push_str(&Self::totals(report));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the executive summary only (concise output)
    pub fn format_summary(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("=== {} ===", report.scenario.name).cyan().bold()
        ));
        output.push_str(&report.executive_summary);
        output.push('\n');
        output.push_str(&Self::totals(report));

        output
    }

    /// Format a report validation result
    pub fn format_validation(validation: &ReportValidation) -> String {
        let mut output = String::new();

        let verdict = if validation.passed {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        };
        output.push_str(&format!(
            "{} {} (overall {:.2})\n",
            "Validation:".cyan().bold(),
            verdict,
            validation.overall_score
        ));

        for (kind, score) in &validation.section_scores {
            output.push_str(&format!("  {:<28} {}\n", kind.title(), Self::colored_score(*score)));
        }

        if !validation.issues.is_empty() {
            output.push_str(&format!("\n{}\n", "Issues:".yellow().bold()));
            for issue in &validation.issues {
                output.push_str(&format!("  * {}\n", issue));
            }
        }

        if !validation.recommendations.is_empty() {
            output.push_str(&format!("\n{}\n", "Recommendations:".cyan().bold()));
            for recommendation in &validation.recommendations {
                output.push_str(&format!("  * {}\n", recommendation));
            }
        }

        output
    }

    /// Format trend metrics across the reports validated in one run
    pub fn format_metrics(metrics: &QualityMetrics) -> String {
        format!(
            "{} {} validated, average {}, {:.0}% passed (threshold {:.2})\n",
            "Metrics:".cyan().bold(),
            metrics.total_validations,
            Self::colored_score(metrics.recent_average_score),
            metrics.recent_pass_rate * 100.0,
            metrics.threshold
        )
    }

    /// Format cumulative generator statistics
    pub fn format_stats(model_name: &str, stats: &GenerationStats) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model_name));
        output.push_str(&format!(
            "  Requests:     {} ({:.0}% success)\n",
            stats.request_count,
            stats.success_rate * 100.0
        ));
        output.push_str(&format!(
            "  Tokens:       {} in / {} out / {} total\n",
            stats.total_input_tokens, stats.total_output_tokens, stats.total_tokens
        ));
        output.push_str(&format!(
            "  Per request:  {:.0} tokens, {:.2}s\n",
            stats.average_tokens_per_request, stats.average_processing_time_secs
        ));

        output
    }

    /// Format the persona catalogue with validation results
    pub fn format_personas(personas: &[(PersonaRole, PersonaValidation)]) -> String {
        let mut output = String::new();

        for (role, validation) in personas {
            let marker = if validation.meets_standard() {
                "v".green()
            } else {
                "x".red()
            };
            output.push_str(&format!(
                "{} {:<22} score {:.1}  {} words\n",
                marker,
                role.display_name().bold(),
                validation.score,
                validation.word_count
            ));
            for line in &validation.feedback {
                output.push_str(&format!("    {}\n", line.dimmed()));
            }
        }

        output
    }

    fn scenario_block(report: &Report) -> String {
        let scenario = &report.scenario;
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Case:".cyan().bold(), scenario.name));
        output.push_str(&format!("{} {}\n", "Type:".cyan().bold(), scenario.case_type));
        output.push_str(&format!("{} {}\n", "Urgency:".cyan().bold(), scenario.urgency));
        output.push_str(&format!(
            "{} {}\n",
            "Key issues:".cyan().bold(),
            scenario.key_issues_joined()
        ));
        output
    }

    fn score_line(quality: &QualityScore) -> String {
        format!(
            "{} {} {}",
            "Quality".dimmed(),
            Self::colored_score(quality.overall),
            format!(
                "(coherence {:.2}, groundedness {:.2}, completeness {:.2}, structure {:.2})",
                quality.coherence, quality.groundedness, quality.completeness, quality.structure
            )
            .dimmed()
        )
    }

    fn colored_score(score: f64) -> String {
        let text = format!("{:.2}", score);
        if score >= 0.8 {
            text.green().to_string()
        } else if score >= 0.6 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }

    fn totals(report: &Report) -> String {
        format!(
            "\n{} {:.1}%   {} {}   {} ${:.4}   {} {:.1}s\n",
            "Confidence:".cyan().bold(),
            report.confidence_score * 100.0,
            "Tokens:".cyan().bold(),
            report.total_tokens,
            "Cost:".cyan().bold(),
            report.total_cost,
            "Time:".cyan().bold(),
            report.processing_time_secs
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &Report) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &Report) -> String {
        Self::format_json(report)
    }

    fn format_summary(&self, report: &Report) -> String {
        Self::format_summary(report)
    }
}
