//! Descriptive statistics over the flat book table
//!
//! Every function here is a pure computation over its inputs. Missing-value
//! counts are taken on the original unknown state; every other statistic
//! works on the substituted columns (unknown price and availability as
//! zero), the same substitution the cleaned CSV carries.

use crate::model::FlatRow;
use crate::StatsError;
use indexmap::IndexMap;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Per-column unknown-value counts, taken before substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSummary {
    pub price: usize,
    pub availability: usize,
    pub description: usize,
}

/// Counts unknown values per column on the original, pre-substitution state
pub fn missing_summary(rows: &[FlatRow]) -> MissingSummary {
    MissingSummary {
        price: rows.iter().filter(|r| r.price.is_none()).count(),
        availability: rows.iter().filter(|r| r.availability.is_none()).count(),
        description: rows.iter().filter(|r| r.description.is_none()).count(),
    }
}

/// Arithmetic mean. Callers guarantee a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median: middle value, or the mean of the two middle values for an even
/// count. Callers guarantee a non-empty slice.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// One bin of a fixed-width histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Splits the value range into `bins` equal-width bins and counts values
/// per bin. The maximum value lands in the last bin. When every value is
/// identical, all values land in a single degenerate bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let lo = min(values);
    let hi = max(values);
    let width = (hi - lo) / bins as f64;

    if width == 0.0 {
        return vec![HistogramBin {
            lower: lo,
            upper: hi,
            count: values.len(),
        }];
    }

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// In-stock vs out-of-stock split over the substituted availability column
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilitySplit {
    pub available: usize,
    pub unavailable: usize,
    /// Percentage of all rows with availability > 0
    pub available_pct: f64,
    /// Percentage of all rows with availability = 0
    pub unavailable_pct: f64,
}

pub fn availability_split(rows: &[FlatRow]) -> AvailabilitySplit {
    let available = rows.iter().filter(|r| r.availability_filled() > 0).count();
    let unavailable = rows.len() - available;
    let total = rows.len() as f64;

    AvailabilitySplit {
        available,
        unavailable,
        available_pct: available as f64 / total * 100.0,
        unavailable_pct: unavailable as f64 / total * 100.0,
    }
}

/// Rows per category, descending by count. Equal counts keep the order the
/// categories first appear in the table.
pub fn category_counts(rows: &[FlatRow]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for row in rows {
        *counts.entry(row.category.as_str()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}

/// Price aggregates for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPriceAggregate {
    pub category: String,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-category price aggregates over the substituted price column,
/// alphabetical by category label for display.
pub fn category_price_aggregates(rows: &[FlatRow]) -> Vec<CategoryPriceAggregate> {
    let mut by_category: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for row in rows {
        by_category
            .entry(row.category.as_str())
            .or_default()
            .push(row.price_filled());
    }

    let mut aggregates: Vec<CategoryPriceAggregate> = by_category
        .into_iter()
        .map(|(category, prices)| CategoryPriceAggregate {
            category: category.to_string(),
            mean: mean(&prices),
            median: median(&prices),
            min: min(&prices),
            max: max(&prices),
        })
        .collect();
    aggregates.sort_by(|a, b| a.category.cmp(&b.category));
    aggregates
}

/// Pearson correlation coefficient with its two-tailed p-value
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub r: f64,
    pub p_value: f64,
}

/// Pearson correlation between two columns of equal length.
///
/// The p-value is two-tailed, from the Student's t distribution with n-2
/// degrees of freedom. Fewer than three rows or a zero-variance column is
/// a computation error.
pub fn pearson(
    xs: &[f64],
    ys: &[f64],
    x_column: &'static str,
    y_column: &'static str,
) -> Result<Correlation, StatsError> {
    let n = xs.len().min(ys.len());
    if n < 3 {
        return Err(StatsError::NotEnoughRows {
            computation: "Pearson correlation",
            needed: 3,
            have: n,
        });
    }

    let x_mean = mean(&xs[..n]);
    let y_mean = mean(&ys[..n]);

    let mut covariance = 0.0;
    let mut x_variance = 0.0;
    let mut y_variance = 0.0;
    for i in 0..n {
        let dx = xs[i] - x_mean;
        let dy = ys[i] - y_mean;
        covariance += dx * dy;
        x_variance += dx * dx;
        y_variance += dy * dy;
    }

    if x_variance == 0.0 {
        return Err(StatsError::ZeroVariance { column: x_column });
    }
    if y_variance == 0.0 {
        return Err(StatsError::ZeroVariance { column: y_column });
    }

    // Rounding can push |r| a hair past 1 for exactly collinear input
    let r = (covariance / (x_variance.sqrt() * y_variance.sqrt())).clamp(-1.0, 1.0);

    // Residual variance within rounding error of zero means the columns are
    // collinear and the t statistic degenerates
    let denom = 1.0 - r * r;
    let p_value = if denom < 1e-12 {
        0.0
    } else {
        let df = (n - 2) as f64;
        let t = r * (df / denom).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df).map_err(|_| StatsError::NotEnoughRows {
            computation: "Pearson correlation",
            needed: 3,
            have: n,
        })?;
        2.0 * dist.cdf(-t.abs())
    };

    Ok(Correlation { r, p_value })
}

/// The `k` highest-priced rows, ties kept in original row order
pub fn top_expensive<'a>(rows: &'a [FlatRow], k: usize) -> Vec<&'a FlatRow> {
    let mut refs: Vec<&FlatRow> = rows.iter().collect();
    // Stable sort, so equal prices stay in table order
    refs.sort_by(|a, b| b.price_filled().total_cmp(&a.price_filled()));
    refs.truncate(k);
    refs
}

/// The `k` lowest-priced rows with a nonzero substituted price.
///
/// Rows at exactly zero are excluded: a zero here almost always means the
/// price was unknown and substituted. Ties keep original row order.
pub fn cheapest_nonzero<'a>(rows: &'a [FlatRow], k: usize) -> Vec<&'a FlatRow> {
    let mut refs: Vec<&FlatRow> = rows
        .iter()
        .filter(|r| r.price_filled() > 0.0)
        .collect();
    refs.sort_by(|a, b| a.price_filled().total_cmp(&b.price_filled()));
    refs.truncate(k);
    refs
}
