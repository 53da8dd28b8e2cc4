//! filetext command-line interface.
//!
//! Prints the readable text of one PDF, CSV or image file to stdout.
//!
//! Exit codes:
//! - `0`: a result was printed (including "unsupported type" and read errors)
//! - `1`: no file path given, the file does not exist, or `--config` is bad
//! - `2`: with `--strict`, the file could not be read; also clap usage errors

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use filetext::{ExtractionConfig, Outcome, extract, route};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "FILETEXT_LOG";

#[derive(Parser)]
#[command(name = "filetext", version, about = "Print the readable text of a PDF, CSV or image file")]
struct Cli {
    /// File to read (.pdf, .csv, .png, .jpg, .jpeg, .bmp, .tiff)
    file_path: Option<PathBuf>,

    /// Configuration file (TOML, or JSON by extension). Defaults to a
    /// discovered filetext.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 2 when the file cannot be read
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(path) = cli.file_path.as_deref() else {
        println!("No file path provided");
        return Ok(ExitCode::from(1));
    };

    let outcome = match route(path) {
        Ok(_) => {
            let config = load_config(cli.config.as_deref())?;
            extract(path, &config).await
        }
        Err(outcome) => outcome,
    };

    print_outcome(&outcome, cli.format)?;

    Ok(ExitCode::from(exit_status(&outcome, cli.strict)))
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ExtractionConfig> {
    match path {
        Some(path) => ExtractionConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => match ExtractionConfig::discover() {
            Ok(discovered) => Ok(discovered.unwrap_or_default()),
            Err(e) => {
                tracing::warn!("Ignoring discovered filetext.toml: {}", e);
                Ok(ExtractionConfig::default())
            }
        },
    }
}

fn print_outcome(outcome: &Outcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", outcome),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome).context("Failed to serialize result")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn exit_status(outcome: &Outcome, strict: bool) -> u8 {
    if outcome.is_fatal() {
        1
    } else if strict && outcome.is_failure() {
        2
    } else {
        0
    }
}
