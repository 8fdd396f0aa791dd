//! swimkin CLI — command-line front end for the kinematics pipeline.
//!
//! Consumes a landmark JSON mapping (produced by whatever parses the
//! tracker's output) plus an optional configuration JSON, and writes the
//! result table (legacy row records by default) and, on request, per-bout
//! summaries.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use swimkin::{Analyzer, KinematicsConfig, LandmarkSet};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "swimkin")]
#[command(about = "Compute swim-bout kinematics from 2D pose-tracking landmarks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the kinematics pipeline on a landmark file.
    Run(RunArgs),

    /// Print the default configuration as JSON.
    DefaultConfig,
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Path to the landmark JSON mapping
    /// ({"name": {"x": [...], "y": [...], "conf": [...]}}).
    #[arg(long)]
    landmarks: PathBuf,

    /// Path to the configuration JSON. Defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to write the result table (JSON).
    #[arg(long)]
    out: PathBuf,

    /// Path to write per-bout summaries (JSON).
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Write the columnar table instead of legacy row records.
    #[arg(long)]
    columnar: bool,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => cmd_run(args),
        Commands::DefaultConfig => cmd_default_config(),
    }
}

fn cmd_run(args: RunArgs) -> CliResult<()> {
    let analyzer = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration: {}", path.display());
            Analyzer::from_config_json_file(path)?
        }
        None => Analyzer::new(),
    };

    tracing::info!("Loading landmarks: {}", args.landmarks.display());
    let landmarks = LandmarkSet::from_json_file(&args.landmarks)?;
    tracing::info!(
        "{} landmarks, {} frames",
        landmarks.len(),
        landmarks.n_frames()?
    );

    let (table, summaries) = analyzer.run_with_summaries(&landmarks)?;
    tracing::info!(
        "Computed {} rows, {} spine joints, {} bouts",
        table.n_frames(),
        table.n_spine_joints(),
        table.bouts.len()
    );

    let payload = if args.columnar {
        serde_json::to_string_pretty(&table)?
    } else {
        serde_json::to_string_pretty(&table.to_records())?
    };
    fs::write(&args.out, payload)?;
    tracing::info!("Results written to {}", args.out.display());

    if let Some(summary_path) = &args.summary {
        fs::write(summary_path, serde_json::to_string_pretty(&summaries)?)?;
        tracing::info!("Bout summaries written to {}", summary_path.display());
    }

    Ok(())
}

fn cmd_default_config() -> CliResult<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&KinematicsConfig::default())?
    );
    Ok(())
}
