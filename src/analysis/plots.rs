//! Chart rendering for the analysis stage
//!
//! Four charts, each saved as a 1200x800 PNG via the [`plotters`] bitmap
//! backend, which works in headless environments. No interactive display.

use crate::analysis::stats::HistogramBin;
use plotters::data::Quartiles;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart generation
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

const CHART_SIZE: (u32, u32) = (1200, 800);

/// Renders the price frequency histogram (fixed 20-bin layout upstream).
///
/// # Arguments
/// * `bins` - Precomputed histogram bins from [`crate::analysis::stats::histogram`]
/// * `output_path` - Path where the PNG file should be saved
pub fn price_histogram(bins: &[HistogramBin], output_path: &Path) -> Result<()> {
    if bins.is_empty() {
        return Err(PlotError::InvalidData(
            "Histogram needs at least one bin".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let x_min = bins[0].lower;
    let mut x_max = bins[bins.len() - 1].upper;
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(1) as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of book prices", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0u32..y_max + 1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Price")
        .y_desc("Frequency")
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lower, 0), (bin.upper, bin.count as u32)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Renders the books-per-category bar chart, counts descending.
///
/// # Arguments
/// * `counts` - (category, row count) pairs in display order
/// * `output_path` - Path where the PNG file should be saved
pub fn category_bar_chart(counts: &[(String, usize)], output_path: &Path) -> Result<()> {
    if counts.is_empty() {
        return Err(PlotError::InvalidData(
            "Bar chart needs at least one category".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let n = counts.len() as u32;
    let y_max = counts.iter().map(|(_, c)| *c).max().unwrap_or(1) as u32;
    let labels: Vec<&str> = counts.iter().map(|(name, _)| name.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Number of books by category", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(140)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max + 1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Category")
        .y_desc("Quantity")
        .label_style(("sans-serif", 16))
        .x_labels(counts.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(4)
                .data(
                    counts
                        .iter()
                        .enumerate()
                        .map(|(i, (_, count))| (i as u32, *count as u32)),
                ),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Renders the per-category price distribution as a box plot.
///
/// # Arguments
/// * `prices_by_category` - (category, substituted prices) in category order
/// * `output_path` - Path where the PNG file should be saved
pub fn price_by_category_boxplot(
    prices_by_category: &[(String, Vec<f64>)],
    output_path: &Path,
) -> Result<()> {
    if prices_by_category.is_empty() {
        return Err(PlotError::InvalidData(
            "Box plot needs at least one category".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let n = prices_by_category.len() as u32;
    let y_max = prices_by_category
        .iter()
        .flat_map(|(_, prices)| prices.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);
    let labels: Vec<&str> = prices_by_category
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Price distribution by category", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(140)
        .y_label_area_size(70)
        // The boxplot element works in f32, so the y-axis must too
        .build_cartesian_2d((0u32..n).into_segmented(), 0f32..(y_max * 1.05) as f32)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Category")
        .y_desc("Price")
        .label_style(("sans-serif", 16))
        .x_labels(prices_by_category.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            prices_by_category
                .iter()
                .enumerate()
                .map(|(i, (_, prices))| {
                    Boxplot::new_vertical(
                        SegmentValue::CenterOf(i as u32),
                        &Quartiles::new(prices),
                    )
                }),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Renders the price vs availability scatter plot.
///
/// # Arguments
/// * `points` - (substituted price, substituted availability) per row
/// * `output_path` - Path where the PNG file should be saved
pub fn price_scatter(points: &[(f64, f64)], output_path: &Path) -> Result<()> {
    if points.is_empty() {
        return Err(PlotError::InvalidData(
            "Scatter plot needs at least one point".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let x_max = points
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);
    let y_max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Correlation between price and availability",
            ("sans-serif", 40),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.05)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Price")
        .y_desc("Availability")
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.mix(0.7).filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
