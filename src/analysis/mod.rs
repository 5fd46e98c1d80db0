//! Analysis stage: statistics, charts, and the cleaned table
//!
//! Loads the category index written by the scrape stage, flattens it into
//! the one-row-per-book table, and runs every computation over it:
//! - Console summaries (overview, missing values, price, availability,
//!   categories, correlation, extremes)
//! - Four chart PNGs
//! - The cleaned CSV
//!
//! The stage never mutates the loaded data; missing-value substitution
//! happens through row accessors at each computation site.

mod plots;
mod report;
pub mod stats;

pub use plots::PlotError;
pub use report::AnalysisReport;

use crate::config::Config;
use crate::model::{flatten, FlatRow};
use crate::store::{load_category_index, write_cleaned_table};
use crate::{Result, StatsError};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Fixed bin count for the price histogram
const PRICE_HISTOGRAM_BINS: usize = 20;

/// How many rows the extremes rankings display
const EXTREMES_COUNT: usize = 5;

/// Runs the complete analysis stage.
///
/// Reads the raw JSON from the configured path, prints the console report,
/// then writes chart PNGs and the cleaned CSV into the analysis directory.
/// Each artifact is written only after its computation succeeded.
pub fn run(config: &Config) -> Result<()> {
    let raw_path = Path::new(&config.output.raw_data_path);
    tracing::info!("Loading raw data from {}", raw_path.display());

    let index = load_category_index(raw_path)?;
    let rows = flatten(&index);

    if rows.is_empty() {
        return Err(StatsError::NotEnoughRows {
            computation: "analysis",
            needed: 1,
            have: 0,
        }
        .into());
    }

    tracing::info!("Analyzing {} books across {} categories", rows.len(), index.len());

    let report = build_report(&rows)?;
    report::print_report(&report);

    let analysis_dir = Path::new(&config.output.analysis_dir);
    fs::create_dir_all(analysis_dir)?;

    let prices: Vec<f64> = rows.iter().map(|r| r.price_filled()).collect();
    let bins = stats::histogram(&prices, PRICE_HISTOGRAM_BINS);
    plots::price_histogram(&bins, &analysis_dir.join("price_distribution.png"))?;

    plots::category_bar_chart(
        &report.category_counts,
        &analysis_dir.join("books_by_category.png"),
    )?;

    let by_category = prices_by_category(&rows);
    plots::price_by_category_boxplot(&by_category, &analysis_dir.join("price_by_category.png"))?;

    let points: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.price_filled(), r.availability_filled() as f64))
        .collect();
    plots::price_scatter(&points, &analysis_dir.join("price_vs_availability.png"))?;

    let csv_path = analysis_dir.join("cleaned_books.csv");
    write_cleaned_table(&rows, &csv_path)?;
    println!();
    println!("Cleaned data was saved into {}", csv_path.display());
    println!();
    println!("Analysis completed.");

    Ok(())
}

/// Computes every statistic the console report displays
pub fn build_report(rows: &[FlatRow]) -> Result<AnalysisReport> {
    let prices: Vec<f64> = rows.iter().map(|r| r.price_filled()).collect();
    let availabilities: Vec<f64> = rows.iter().map(|r| r.availability_filled() as f64).collect();

    let correlation = stats::pearson(&prices, &availabilities, "price", "availability")?;

    let category_counts = stats::category_counts(rows);

    Ok(AnalysisReport {
        total_rows: rows.len(),
        category_count: category_counts.len(),
        missing: stats::missing_summary(rows),
        price_mean: stats::mean(&prices),
        price_median: stats::median(&prices),
        price_max: stats::max(&prices),
        price_min: stats::min(&prices),
        availability_mean: stats::mean(&availabilities),
        availability_median: stats::median(&availabilities),
        availability_split: stats::availability_split(rows),
        category_counts,
        category_prices: stats::category_price_aggregates(rows),
        correlation,
        most_expensive: stats::top_expensive(rows, EXTREMES_COUNT)
            .into_iter()
            .cloned()
            .collect(),
        cheapest: stats::cheapest_nonzero(rows, EXTREMES_COUNT)
            .into_iter()
            .cloned()
            .collect(),
    })
}

/// Groups substituted prices by category in first-seen (index) order
fn prices_by_category(rows: &[FlatRow]) -> Vec<(String, Vec<f64>)> {
    let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for row in rows {
        groups
            .entry(row.category.as_str())
            .or_default()
            .push(row.price_filled());
    }

    groups
        .into_iter()
        .map(|(category, prices)| (category.to_string(), prices))
        .collect()
}
