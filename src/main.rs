//! Command line entry point for pitch-rating
//!
//! Reads a JSON file of match submissions, rates each one and prints the
//! results as JSON lines, optionally followed by a weekly leaderboard and a
//! metrics dump.

use anyhow::{Context, Result};
use clap::Parser;
use pitch_rating::config::AppConfig;
use pitch_rating::leaderboard::{InMemoryLeaderboard, RatingService};
use pitch_rating::metrics::MetricsCollector;
use pitch_rating::rating::{RatingCalculator, RatingEngine, ValidationPolicy};
use pitch_rating::types::MatchSubmission;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Pitch Rating - position-weighted match performance ratings
#[derive(Parser)]
#[command(
    name = "pitch-rating",
    version,
    about = "Rate football match performances on a 1.0 to 10.0 scale",
    long_about = "Pitch Rating converts per-match event counters (goals, passes, tackles, \
                 cards and more) into a single performance rating weighted by playing \
                 position, and ranks players on weekly leaderboards."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Match submissions to rate
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "JSON file containing an array of match submissions"
    )]
    input: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Print per-component contributions
    #[arg(short, long, help = "Include the per-component breakdown in output")]
    breakdown: bool,

    /// Clamp out-of-range counters instead of rejecting them
    #[arg(long, help = "Clamp negative counters to zero instead of rejecting")]
    clamp: bool,

    /// Leaderboard week to print
    #[arg(long, value_name = "WEEK", help = "Print the leaderboard for WEEK")]
    leaderboard: Option<u32>,

    /// Print metrics after rating
    #[arg(long, help = "Print Prometheus metrics after rating")]
    metrics: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without rating")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if args.breakdown {
        config.rating.include_breakdown = true;
    }

    if args.clamp {
        config.rating.validation_policy = ValidationPolicy::Clamp;
    }

    pitch_rating::config::validate_config(&config)?;
    Ok(config)
}

fn read_submissions(path: &Path) -> Result<Vec<MatchSubmission>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid submissions in {}", path.display()))
}

/// Display startup banner with service information
fn display_startup_banner(config: &AppConfig) {
    info!("Pitch Rating v{}", pitch_rating::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!(
        "   Validation policy: {}",
        config.rating.validation_policy
    );
    info!("   Leaderboard size: {}", config.rating.leaderboard_size);
}

fn run(args: &Args, config: AppConfig) -> Result<()> {
    let engine = Arc::new(RatingEngine::standard());

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Rating model: {}", engine.config());
        info!("Dry run completed - exiting without rating");
        return Ok(());
    }

    let input = args
        .input
        .as_deref()
        .context("No input file given (use --input FILE)")?;
    let submissions = read_submissions(input)?;
    info!(
        "Rating {} submissions from {}",
        submissions.len(),
        input.display()
    );

    let metrics = Arc::new(MetricsCollector::new()?);
    let storage = Arc::new(InMemoryLeaderboard::new(config.rating.max_stored_matches));
    let service =
        RatingService::new(engine, storage, config.rating.clone()).with_metrics(metrics.clone());

    let mut rejected = 0usize;
    for submission in submissions {
        let player_id = submission.player_id.clone();
        match service.submit(submission) {
            Ok(rated) => {
                println!("{}", rated.to_report(config.rating.include_breakdown));
            }
            Err(e) => {
                rejected += 1;
                warn!("Skipping submission for player '{}': {}", player_id, e);
            }
        }
    }

    if rejected > 0 {
        warn!("{} submissions rejected", rejected);
    }

    if let Some(week) = args.leaderboard {
        let board = service.leaderboard(week)?;
        info!("Week {} leaderboard ({} players)", week, board.len());
        for entry in board {
            println!("{}", serde_json::to_string(&entry)?);
        }
    }

    if args.metrics {
        print!("{}", metrics.export_text()?);
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    if let Err(e) = run(&args, config) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
