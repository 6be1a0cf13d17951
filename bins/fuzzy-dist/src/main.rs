//! fuzzy-dist: edit distances between strings and files.
//!
//! Computes Levenshtein and optimal string alignment distances over Unicode
//! code points.

use clap::{Parser, Subcommand};
use fuzzy_distance::{DistanceError, Metric};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::{Config, OutputFormat, Settings};

/// Edit distance calculator (Levenshtein and OSA)
#[derive(Parser)]
#[command(name = "fuzzy-dist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "FUZZY_DIST_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum input length in code points (overrides the config file)
    #[arg(long, global = true, env = "FUZZY_DIST_MAX_CHARS")]
    max_chars: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two strings
    Compare {
        /// First string
        left: String,

        /// Second string
        right: String,

        /// Metric to compute (repeatable; defaults to the configured list)
        #[arg(short = 'm', long = "metric", value_parser = parse_metric)]
        metrics: Vec<Metric>,
    },

    /// Compare the contents of two UTF-8 files
    Files {
        /// First file
        left: PathBuf,

        /// Second file
        right: PathBuf,

        /// Metric to compute (repeatable; defaults to the configured list)
        #[arg(short = 'm', long = "metric", value_parser = parse_metric)]
        metrics: Vec<Metric>,
    },

    /// List available metrics
    Metrics,
}

fn parse_metric(value: &str) -> Result<Metric, DistanceError> {
    value.parse()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("fuzzy_dist=debug,fuzzy_distance=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, cli.max_chars, cli.format);
    tracing::debug!(
        config = ?config.path,
        max_chars = settings.max_chars,
        format = ?settings.format,
        "settings resolved"
    );

    match cli.command {
        Commands::Compare { left, right, metrics } => {
            commands::compare::run(&left, &right, &metrics, &settings)
        }
        Commands::Files { left, right, metrics } => {
            commands::files::run(&left, &right, &metrics, &settings)
        }
        Commands::Metrics => commands::metrics::run(settings.format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
