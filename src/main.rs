//! Shelf-Scout main entry point
//!
//! Command-line interface for the book catalog scraper and analyst.

use clap::{Parser, Subcommand};
use shelf_scout::config::{load_config, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shelf-Scout: a book catalog scraper and analyst
///
/// The `scrape` command walks the catalog site category by category and
/// writes the raw results as JSON. The `analyze` command reads that file
/// back, prints descriptive statistics, renders charts, and writes the
/// cleaned CSV. The two stages share nothing but the raw data file.
#[derive(Parser, Debug)]
#[command(name = "shelf-scout")]
#[command(version = "1.0.0")]
#[command(about = "A book catalog scraper and analyst", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file; defaults are used
    /// when omitted
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the catalog site and write the raw books JSON
    Scrape,

    /// Analyze previously scraped data: statistics, charts, cleaned CSV
    Analyze,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Scrape => handle_scrape(&config).await?,
        Command::Analyze => handle_analyze(&config)?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelf_scout=info,warn"),
            1 => EnvFilter::new("shelf_scout=debug,info"),
            2 => EnvFilter::new("shelf_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the scrape subcommand
async fn handle_scrape(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Scraping catalog at {}", config.site.base_url);

    match shelf_scout::scrape::run(config).await {
        Ok(()) => {
            tracing::info!("Scrape completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Handles the analyze subcommand
fn handle_analyze(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match shelf_scout::analysis::run(config) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            Err(e.into())
        }
    }
}
