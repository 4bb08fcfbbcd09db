//! CLI argument parsing tests.

use clap::Parser;

use plan_preflight::cli::args::{Cli, Commands, OutputFormat};

#[test]
fn version_subcommand_parses() {
    let cli = Cli::try_parse_from(["plan-preflight", "version"]).unwrap();
    assert!(matches!(cli.command, Commands::Version));
}

#[test]
fn validate_defaults_are_conservative() {
    let cli = Cli::try_parse_from(["plan-preflight", "validate", "brief.json", "plan.md"]).unwrap();
    match cli.command {
        Commands::Validate {
            ai_validation,
            output,
            format,
            config,
            tolerance,
            quiet,
            no_color,
            verbose,
            ..
        } => {
            assert!(!ai_validation);
            assert!(output.is_none());
            assert_eq!(format, OutputFormat::Text);
            assert!(config.is_none());
            assert!(tolerance.is_none());
            assert!(!quiet);
            assert!(!no_color);
            assert!(!verbose);
        }
        _ => panic!("expected validate"),
    }
}

#[test]
fn output_and_config_paths_parse() {
    let cli = Cli::try_parse_from([
        "plan-preflight",
        "validate",
        "brief.json",
        "plan.md",
        "--output",
        "report.json",
        "--config",
        "preflight.toml",
    ])
    .unwrap();
    match cli.command {
        Commands::Validate { output, config, .. } => {
            assert_eq!(output.unwrap().to_str(), Some("report.json"));
            assert_eq!(config.unwrap().to_str(), Some("preflight.toml"));
        }
        _ => panic!("expected validate"),
    }
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from([
        "plan-preflight",
        "validate",
        "brief.json",
        "plan.md",
        "--format",
        "yaml",
    ])
    .is_err());
}
