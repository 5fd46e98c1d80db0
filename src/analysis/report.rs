//! Console report for the analysis stage
//!
//! Prints every computed statistic in a fixed section order: overview,
//! missing values, price, availability, categories, price by category,
//! correlation, then the five most expensive and cheapest books.

use crate::analysis::stats::{
    AvailabilitySplit, CategoryPriceAggregate, Correlation, MissingSummary,
};
use crate::model::FlatRow;

/// Everything the console report displays, computed once by the orchestrator
#[derive(Debug)]
pub struct AnalysisReport {
    pub total_rows: usize,
    pub category_count: usize,
    pub missing: MissingSummary,

    pub price_mean: f64,
    pub price_median: f64,
    pub price_max: f64,
    pub price_min: f64,

    pub availability_mean: f64,
    pub availability_median: f64,
    pub availability_split: AvailabilitySplit,

    pub category_counts: Vec<(String, usize)>,
    pub category_prices: Vec<CategoryPriceAggregate>,

    pub correlation: Correlation,

    pub most_expensive: Vec<FlatRow>,
    pub cheapest: Vec<FlatRow>,
}

/// Prints the full report to stdout
pub fn print_report(report: &AnalysisReport) {
    println!("=== Data Overview ===");
    println!("Total books: {}", report.total_rows);
    println!("Categories: {}", report.category_count);
    println!();

    println!("=== Missing Values ===");
    println!("price: {}", report.missing.price);
    println!("availability: {}", report.missing.availability);
    println!("description: {}", report.missing.description);
    println!();

    println!("=== Price Analysis ===");
    println!("Average price: {:.2}", report.price_mean);
    println!("Median price: {:.2}", report.price_median);
    println!("Highest price: {:.2}", report.price_max);
    println!("Lowest price: {:.2}", report.price_min);
    println!();

    println!("=== Availability Analysis ===");
    println!("Average quantity in stock: {:.2}", report.availability_mean);
    println!("Median quantity in stock: {:.2}", report.availability_median);
    println!(
        "Books available: {} ({:.2}%)",
        report.availability_split.available, report.availability_split.available_pct
    );
    println!(
        "Books unavailable: {} ({:.2}%)",
        report.availability_split.unavailable, report.availability_split.unavailable_pct
    );
    println!();

    println!("=== Category Analysis ===");
    for (category, count) in &report.category_counts {
        println!("{}: {}", category, count);
    }
    println!();

    println!("=== Price by Category ===");
    println!(
        "{:<30} {:>8} {:>8} {:>8} {:>8}",
        "category", "mean", "median", "min", "max"
    );
    for aggregate in &report.category_prices {
        println!(
            "{:<30} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            aggregate.category, aggregate.mean, aggregate.median, aggregate.min, aggregate.max
        );
    }
    println!();

    println!("=== Correlation Analysis ===");
    println!(
        "Pearson correlation coefficient between price and availability: {:.4} (p-value: {:.4})",
        report.correlation.r, report.correlation.p_value
    );
    println!();

    println!("=== Top 5 most expensive books ===");
    print_extremes(&report.most_expensive);
    println!();

    println!("=== Top 5 cheapest books ===");
    print_extremes(&report.cheapest);
}

fn print_extremes(rows: &[FlatRow]) {
    for row in rows {
        println!(
            "{:<50} {:>8.2}  {}",
            truncated(&row.title, 50),
            row.price_filled(),
            row.category
        );
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_short_text_unchanged() {
        assert_eq!(truncated("Atlas", 50), "Atlas");
    }

    #[test]
    fn test_truncated_long_text_gets_ellipsis() {
        let long = "x".repeat(60);
        let cut = truncated(&long, 50);
        assert_eq!(cut.chars().count(), 50);
        assert!(cut.ends_with('…'));
    }
}
