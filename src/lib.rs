//! Shelf-Scout: a book catalog scraper and analyst
//!
//! This crate scrapes a paginated book catalog site into a category-keyed
//! JSON data set, then computes descriptive statistics and renders charts
//! over the collected records.

pub mod analysis;
pub mod config;
pub mod model;
pub mod scrape;
pub mod store;

use thiserror::Error;

/// Main error type for Shelf-Scout operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP {status} fetching {url}")]
    Http { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("Book detail page at {url} has no title heading")]
    MissingTitle { url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Plot error: {0}")]
    Plot(#[from] analysis::PlotError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors from statistical computations
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Not enough rows for {computation}: need at least {needed}, have {have}")]
    NotEnoughRows {
        computation: &'static str,
        needed: usize,
        have: usize,
    },

    #[error("Column '{column}' has zero variance, correlation is undefined")]
    ZeroVariance { column: &'static str },
}

/// Result type alias for Shelf-Scout operations
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{flatten, BookRecord, CategoryIndex, FlatRow};
