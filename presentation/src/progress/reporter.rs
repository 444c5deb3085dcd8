//! Progress reporting for report generation

use colored::Colorize;
use dossier_application::ReportProgressNotifier;
use dossier_domain::{QualityScore, Report, SectionKind, SectionResult};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during report generation with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    report_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            report_bar: Mutex::new(None),
        }
    }

    fn report_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.report_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportProgressNotifier for ProgressReporter {
    fn on_report_start(&self, scenario_name: &str, total_sections: usize) {
        let pb = self.multi.add(ProgressBar::new(total_sections as u64));
        pb.set_style(Self::report_style());
        pb.set_prefix(scenario_name.to_string());
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.report_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_section_start(&self, kind: SectionKind, _index: usize, _total: usize) {
        self.with_bar(|pb| pb.set_message(kind.title().to_string()));
    }

    fn on_section_attempt(&self, kind: SectionKind, attempt: usize, max_attempts: usize) {
        if attempt > 1 {
            self.with_bar(|pb| {
                pb.set_message(format!(
                    "{} (attempt {}/{})",
                    kind.title(),
                    attempt,
                    max_attempts
                ))
            });
        }
    }

    fn on_section_scored(&self, kind: SectionKind, attempt: usize, quality: &QualityScore) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "{} scored {:.2} on attempt {}",
                kind.title(),
                quality.overall,
                attempt
            ))
        });
    }

    fn on_section_complete(&self, section: &SectionResult) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "{} {} ({:.2})",
                "v".green(),
                section.title,
                section.quality_score()
            ));
            pb.inc(1);
        });
    }

    fn on_report_complete(&self, report: &Report) {
        if let Ok(mut guard) = self.report_bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(format!(
                "{} (confidence {:.1}%)",
                "Report complete!".green(),
                report.confidence_score * 100.0
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ReportProgressNotifier for SimpleProgress {
    fn on_report_start(&self, scenario_name: &str, total_sections: usize) {
        eprintln!(
            "{} {} ({} sections)",
            "->".cyan(),
            scenario_name.bold(),
            total_sections
        );
    }

    fn on_section_start(&self, kind: SectionKind, index: usize, total: usize) {
        eprintln!("  [{}/{}] {}", index + 1, total, kind.title());
    }

    fn on_section_scored(&self, _kind: SectionKind, attempt: usize, quality: &QualityScore) {
        eprintln!("      attempt {}: {:.2}", attempt, quality.overall);
    }

    fn on_section_complete(&self, section: &SectionResult) {
        eprintln!(
            "  {} {} ({:.2})",
            "v".green(),
            section.title,
            section.quality_score()
        );
    }

    fn on_report_complete(&self, _report: &Report) {
        eprintln!();
    }
}
