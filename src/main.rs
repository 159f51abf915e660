//! Fitness Tracker - Workout Summary Calculator
//!
//! Main entry point: reads sensor packages and prints one report per package.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fitness_tracker::packages::{demo_packages, load_packages};
use fitness_tracker::storage::config::{load_config, load_config_from};
use fitness_tracker::{OutputFormat, ReportRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for fitness-tracker
#[derive(Parser, Debug)]
#[command(name = "fitness-tracker")]
#[command(about = "Summarise running, walking and swimming sensor packages")]
#[command(version)]
struct Args {
    /// Package file (TOML, or JSON by extension). Uses the demo set when omitted.
    #[arg(short, long)]
    packages: Option<PathBuf>,

    /// Configuration file. Defaults to the platform config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overriding the configured one
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config().context("Failed to load config")?,
    };

    // Logs go to stderr so stdout carries only report lines
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting fitness-tracker v{}", env!("CARGO_PKG_VERSION"));

    let packages = match &args.packages {
        Some(path) => load_packages(path)
            .with_context(|| format!("Failed to load packages from {}", path.display()))?,
        None => demo_packages(),
    };

    let format = args.format.unwrap_or(config.output.format);
    let stdout = std::io::stdout();
    let mut runner = ReportRunner::new(stdout.lock(), format);
    let summary = runner.run(&packages).context("Reporting aborted")?;

    tracing::info!(
        reported = summary.reported,
        unknown = summary.unknown,
        "Finished reporting"
    );

    Ok(())
}
