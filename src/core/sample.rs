//! # Sample
//!
//! One benchmark measurement: which algorithm, over how many elements,
//! how long it took. This is the row shape of the CSV result files and
//! the unit everything else aggregates over.

/// A single benchmark measurement
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Algorithm name, e.g. "Quick Sort"
    pub algorithm: String,

    /// Input size in elements
    pub size: usize,

    /// Elapsed wall time in seconds
    pub seconds: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(algorithm: impl Into<String>, size: usize, seconds: f64) -> Self {
        Self {
            algorithm: algorithm.into(),
            size,
            seconds,
        }
    }

    /// Chart label combining algorithm and size, e.g. "Quick Sort (10000)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.algorithm, self.size)
    }
}

/// Order samples by elapsed time, slowest first.
///
/// Used by the ranking chart so the tallest bar comes first.
pub fn rank_descending(samples: &mut [Sample]) {
    samples.sort_by(|a, b| b.seconds.total_cmp(&a.seconds));
}
