//! # Plot Port
//!
//! Contract for turning benchmark samples into chart images.

use std::path::Path;

use crate::core::sample::Sample;
use crate::core::series::SeriesMap;

/// Result type for plot operations
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors from chart rendering
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// No samples to draw
    #[error("no samples to plot")]
    EmptyInput,

    /// Creating the output file or directory failed
    #[error("chart output I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The drawing backend reported an error
    #[error("chart rendering failed: {0}")]
    Backend(String),
}

/// Chart rendering over benchmark samples
pub trait Plot {
    /// Render a ranking bar chart: one bar per sample, slowest first,
    /// elapsed time printed above each bar.
    fn render_ranking(&self, samples: &[Sample], out: &Path) -> PlotResult<()>;

    /// Render a two-panel scaling chart: log-log lines per algorithm
    /// over input size, plus grouped per-size bars on a log y axis.
    fn render_scaling(&self, series: &SeriesMap, out: &Path) -> PlotResult<()>;
}
