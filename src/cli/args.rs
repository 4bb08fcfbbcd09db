//! Command line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON (same shape as the report file)
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "plan-preflight")]
#[command(about = "Pre-ship validation of media plans against campaign briefs")]
#[command(version)]
#[command(after_help = "\
EXIT CODES:
    0   Overall status PASS
    1   Overall status FAIL (any mandatory check failed or errored)
    2   Input error (unreadable files, malformed brief JSON, bad config)

The advisory AI review requires OPENAI_API_KEY; without it the review is
recorded as SKIPPED and never affects the exit code.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a media plan document against its JSON campaign brief
    Validate {
        /// Path to the JSON campaign brief
        brief: PathBuf,
        /// Path to the plan document
        plan: PathBuf,
        /// Also run the advisory AI strategy review
        #[arg(long)]
        ai_validation: bool,
        /// Write the JSON report to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Terminal output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
        /// TOML configuration overlay
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the relative budget tolerance (fraction, e.g. 0.05)
        #[arg(long)]
        tolerance: Option<f64>,
        /// Only print failing, erroring, and skipped checks
        #[arg(long)]
        quiet: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
        /// Include structured details for every check
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print detailed build information
    Version,
}
