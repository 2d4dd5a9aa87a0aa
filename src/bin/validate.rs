//! Configuration Validator CLI
//!
//! Validates a YAML configuration file against a YAML schema (rules) file.
//!
//! Exit codes: `0` valid, `1` validation failed, `2` invalid YAML or any
//! other error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use yaml_schema_validator::{
    load_document, Error, OutputFormat, Result, ValidationIssue, Validator, ValidatorSettings,
};

#[derive(Parser)]
#[command(name = "yaml-schema-validate")]
#[command(about = "YAML schema-based configuration validator")]
#[command(version)]
struct Cli {
    /// Path to YAML schema (rules) file
    #[arg(short, long)]
    schema: PathBuf,

    /// Path to YAML configuration file to validate
    #[arg(short, long)]
    config: PathBuf,

    /// Allow configuration keys not defined in the schema (default)
    #[arg(long, overrides_with = "no_allow_extra_keys")]
    allow_extra_keys: bool,

    /// Reject configuration keys not defined in the schema
    #[arg(long, overrides_with = "allow_extra_keys")]
    no_allow_extra_keys: bool,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Settings file (TOML)
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    issues: &'a [ValidationIssue],
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) if e.is_parse_error() => {
            eprintln!("❌ Invalid YAML: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Unexpected error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = ValidatorSettings::load_from(cli.settings.as_deref())?;

    let allow_extra_keys = if cli.no_allow_extra_keys {
        false
    } else if cli.allow_extra_keys {
        true
    } else {
        settings.validation.allow_extra_keys
    };
    let format = cli.format.unwrap_or(settings.output.format);

    let schema = load_document(&cli.schema)?;
    let config = load_document(&cli.config)?;
    let validator = Validator::new().allow_extra_keys(allow_extra_keys);

    match format {
        OutputFormat::Text => match validator.assert_valid(&schema, &config) {
            Ok(()) => {
                println!("✅ Configuration is valid.");
                Ok(ExitCode::SUCCESS)
            }
            Err(failure) => {
                eprintln!("❌ Validation failed:");
                for issue in failure.issues() {
                    eprintln!("  - {}", issue);
                }
                Ok(ExitCode::from(1))
            }
        },
        OutputFormat::Json => {
            let issues = validator.validate(&schema, &config);
            let report = JsonReport {
                valid: issues.is_empty(),
                issues: &issues,
            };
            println!("{}", serde_json::to_string_pretty(&report).map_err(Error::from)?);
            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}
