//! Output formatting for plan-preflight.
//!
//! Provides terminal and JSON formatters over the validation report. All
//! formatters produce valid output for any report, including empty ones.

use crate::cli::args::OutputFormat;
use crate::engine::report::ValidationReport;
use crate::CheckStatus;

/// Trait for output formatters.
pub trait OutputFormatter {
    /// Format a validation report into a string.
    fn format(&self, report: &ValidationReport) -> String;
}

/// Terminal (human-readable) formatter.
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn status_label(&self, status: CheckStatus) -> String {
        match status {
            CheckStatus::Pass => self.colorize("PASS", "32"),
            CheckStatus::Fail => self.colorize("FAIL", "31"),
            CheckStatus::Error => self.colorize("ERROR", "31"),
            CheckStatus::Skipped => self.colorize("SKIPPED", "90"),
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str("plan-preflight validation report\n");
        output.push_str(&format!("Test case: {}\n", report.test_case));
        output.push_str(&format!("Brief: {}\n", report.brief_file));
        output.push_str(&format!("Plan: {}\n", report.plan_file));
        output.push_str(&format!("Timestamp: {}\n", report.timestamp));
        output.push_str(&"-".repeat(72));
        output.push_str("\n\n");

        for result in &report.results {
            if self.quiet && result.status == CheckStatus::Pass {
                continue;
            }
            output.push_str(&format!(
                "[{}] {}: {}\n",
                self.status_label(result.status),
                result.name,
                result.message
            ));
            if self.verbose && !result.details.is_null() {
                let details = serde_json::to_string_pretty(&result.details)
                    .unwrap_or_else(|_| result.details.to_string());
                for line in details.lines() {
                    output.push_str(&format!("    {}\n", line));
                }
            }
        }

        let summary = report.summary();
        output.push_str(&format!(
            "\n{} passed, {} failed, {} errored, {} skipped\n",
            summary.passed, summary.failed, summary.errored, summary.skipped
        ));

        let overall = match report.overall_status {
            crate::engine::report::OverallStatus::Pass => self.colorize("PASS", "32"),
            crate::engine::report::OverallStatus::Fail => self.colorize("FAIL", "31"),
        };
        output.push_str(&format!("Overall: {}\n", overall));

        output
    }
}

/// JSON formatter, identical in shape to the report file.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let result = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        // A report is plain data; serialization only fails on broken
        // formatter state, which we surface rather than hide.
        result.unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }
}

/// Select a formatter for the requested format and flags.
pub fn get_formatter(
    format: OutputFormat,
    color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
