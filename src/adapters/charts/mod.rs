//! # Chart Adapters
//!
//! plotters-backed implementation of the `Plot` port. Renders PNG
//! files through `BitMapBackend`.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::core::config::ChartStyle;
use crate::core::sample::Sample;
use crate::core::series::SeriesMap;
use crate::ports::{Plot, PlotError, PlotResult};

mod palette;
mod ranking;
mod scaling;

/// Chart rendering via the plotters crate
pub struct PlottersCharts {
    /// Style of the ranking bar chart
    pub ranking_style: ChartStyle,

    /// Style of the two-panel scaling chart
    pub scaling_style: ChartStyle,
}

impl Default for PlottersCharts {
    fn default() -> Self {
        Self {
            ranking_style: ChartStyle::ranking(),
            scaling_style: ChartStyle::scaling(),
        }
    }
}

impl PlottersCharts {
    /// Create with custom styles
    pub fn new(ranking_style: ChartStyle, scaling_style: ChartStyle) -> Self {
        Self {
            ranking_style,
            scaling_style,
        }
    }
}

impl Plot for PlottersCharts {
    fn render_ranking(&self, samples: &[Sample], out: &Path) -> PlotResult<()> {
        ranking::render(samples, &self.ranking_style, out)
    }

    fn render_scaling(&self, series: &SeriesMap, out: &Path) -> PlotResult<()> {
        scaling::render(series, &self.scaling_style, out)
    }
}

/// Map a plotters drawing error into the port error type
pub(crate) fn backend_err<E: Display>(error: E) -> PlotError {
    PlotError::Backend(error.to_string())
}

/// Create the output file's parent directory when it does not exist
pub(crate) fn ensure_parent_dir(out: &Path) -> PlotResult<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_samples() -> Vec<Sample> {
        vec![
            Sample::new("Bubble Sort", 10_000, 1.234567),
            Sample::new("Quick Sort", 10_000, 0.004321),
            Sample::new("Merge Sort", 10_000, 0.009876),
            Sample::new("Radix Sort", 10_000, 0.001234),
        ]
    }

    fn search_samples() -> Vec<Sample> {
        vec![
            Sample::new("Linear Search", 10_000, 0.000045),
            Sample::new("Linear Search", 100_000, 0.000450),
            Sample::new("Linear Search", 1_000_000, 0.004500),
            Sample::new("Binary Search", 10_000, 0.000002),
            Sample::new("Binary Search", 100_000, 0.000003),
            Sample::new("Jumping Search", 10_000, 0.000010),
        ]
    }

    #[test]
    fn test_ranking_chart_creates_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sorting_results.png");

        let charts = PlottersCharts::default();
        charts.render_ranking(&sort_samples(), &out).unwrap();

        let meta = std::fs::metadata(&out).unwrap();
        assert!(meta.len() > 0, "chart file is empty");
    }

    #[test]
    fn test_ranking_chart_rejects_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");

        let charts = PlottersCharts::default();
        let err = charts.render_ranking(&[], &out).unwrap_err();

        assert!(matches!(err, PlotError::EmptyInput));
        assert!(!out.exists());
    }

    #[test]
    fn test_scaling_chart_creates_png_in_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("images").join("search_results.png");

        let series = SeriesMap::from_samples(&search_samples());
        let charts = PlottersCharts::default();
        charts.render_scaling(&series, &out).unwrap();

        let meta = std::fs::metadata(&out).unwrap();
        assert!(meta.len() > 0, "chart file is empty");
    }

    #[test]
    fn test_scaling_chart_rejects_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");

        let series = SeriesMap::from_samples(&[]);
        let charts = PlottersCharts::default();
        let err = charts.render_scaling(&series, &out).unwrap_err();

        assert!(matches!(err, PlotError::EmptyInput));
    }

    #[test]
    fn test_scaling_chart_single_size() {
        // One measured size per algorithm must not collapse the log axis
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("single.png");

        let series = SeriesMap::from_samples(&[
            Sample::new("Linear Search", 10_000, 0.0001),
            Sample::new("Binary Search", 10_000, 0.000001),
        ]);
        let charts = PlottersCharts::default();
        charts.render_scaling(&series, &out).unwrap();

        assert!(out.exists());
    }
}
