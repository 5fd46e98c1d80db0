//! Scrape stage: catalog traversal and record extraction
//!
//! This module contains the collection logic, including:
//! - HTTP fetching with a browser-like user agent
//! - Category discovery from the site index
//! - Paginated listing traversal and detail page extraction
//! - Assembly of the category index and its persistence

mod collector;
mod fetcher;
mod parser;

pub use collector::Collector;
pub use fetcher::{build_http_client, fetch_html};
pub use parser::{discover_categories, extract_book, parse_listing, ListingPage};

use crate::config::Config;
use crate::store::write_category_index;
use crate::Result;
use std::path::Path;

/// Runs the complete scrape stage.
///
/// Discovers categories, walks every paginated listing and detail page one
/// fetch at a time, then writes the accumulated category index as JSON to
/// the configured raw data path. Any network or extraction failure aborts
/// the run; nothing is written on partial collection.
pub async fn run(config: &Config) -> Result<()> {
    let collector = Collector::new(config)?;
    let index = collector.collect().await?;

    let total_books: usize = index.values().map(Vec::len).sum();

    let raw_path = Path::new(&config.output.raw_data_path);
    write_category_index(&index, raw_path)?;

    tracing::info!("Data saved to {}", raw_path.display());
    tracing::info!("Total categories processed: {}", index.len());
    tracing::info!("Total books collected: {}", total_books);

    Ok(())
}
