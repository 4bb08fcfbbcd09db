//! plan-preflight CLI entry point.
//!
//! Pre-ship validation of media plans against campaign briefs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use plan_preflight::cli::args::{Cli, Commands, OutputFormat};
use plan_preflight::cli::output::get_formatter;
use plan_preflight::config::ValidationConfig;
use plan_preflight::engine::report::OverallStatus;
use plan_preflight::version::get_build_info;
use plan_preflight::{run_validation, PreflightError, RunOptions};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Commands::Validate {
            brief,
            plan,
            ai_validation,
            output,
            format,
            config,
            tolerance,
            quiet,
            no_color,
            verbose,
        } => run_validate(ValidateArgs {
            brief,
            plan,
            ai_validation,
            output,
            format,
            config,
            tolerance,
            quiet,
            no_color,
            verbose,
        }),
    }
}

struct ValidateArgs {
    brief: PathBuf,
    plan: PathBuf,
    ai_validation: bool,
    output: Option<PathBuf>,
    format: OutputFormat,
    config: Option<PathBuf>,
    tolerance: Option<f64>,
    quiet: bool,
    no_color: bool,
    verbose: bool,
}

fn run_validate(args: ValidateArgs) -> ExitCode {
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => return input_error(e),
    };

    let opts = RunOptions {
        brief_path: args.brief,
        plan_path: args.plan,
        ai_validation: args.ai_validation,
        config,
    };

    let report = match run_validation(&opts) {
        Ok(report) => report,
        Err(e) => return input_error(e),
    };

    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let formatter = get_formatter(args.format, color, args.verbose, args.quiet);
    print!("{}", formatter.format(&report));

    if let Some(path) = args.output {
        if let Err(source) = write_report(&report, &path) {
            return input_error(PreflightError::ReportWrite { path, source });
        }
        tracing::info!(path = %path.display(), "report written");
    }

    match report.overall_status {
        OverallStatus::Pass => ExitCode::SUCCESS,
        OverallStatus::Fail => ExitCode::from(1),
    }
}

fn load_config(args: &ValidateArgs) -> Result<ValidationConfig, PreflightError> {
    let mut config = match &args.config {
        Some(path) => ValidationConfig::from_file(path)?,
        None => ValidationConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        if !(0.0..1.0).contains(&tolerance) {
            return Err(PreflightError::ConfigInvalid {
                path: "--tolerance".into(),
                message: format!("budget_tolerance {} must be in [0, 1)", tolerance),
            });
        }
        config.budget_tolerance = tolerance;
    }
    Ok(config)
}

fn write_report(
    report: &plan_preflight::Report,
    path: &std::path::Path,
) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

fn input_error(e: PreflightError) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::from(2)
}
