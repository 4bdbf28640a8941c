//! # Series
//!
//! Samples grouped per algorithm, the shape the scaling chart consumes:
//! one (sizes, seconds) series per algorithm, in first-seen order so the
//! chart palette stays stable across both panels.

use crate::core::sample::Sample;

/// All measurements for one algorithm, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct AlgoSeries {
    /// Algorithm name
    pub algorithm: String,

    /// Input sizes, parallel to `seconds`
    pub sizes: Vec<usize>,

    /// Elapsed times, parallel to `sizes`
    pub seconds: Vec<f64>,
}

impl AlgoSeries {
    /// Elapsed time at an exact input size, if measured
    pub fn seconds_at(&self, size: usize) -> Option<f64> {
        self.sizes
            .iter()
            .position(|&n| n == size)
            .map(|i| self.seconds[i])
    }

    /// (size, seconds) pairs sorted by size ascending.
    ///
    /// Line series need monotonic x even when the CSV rows arrived
    /// interleaved across algorithms.
    pub fn points_by_size(&self) -> Vec<(usize, f64)> {
        let mut points: Vec<(usize, f64)> = self
            .sizes
            .iter()
            .copied()
            .zip(self.seconds.iter().copied())
            .collect();
        points.sort_by_key(|&(n, _)| n);
        points
    }
}

/// Samples grouped by algorithm, preserving first-seen algorithm order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesMap {
    series: Vec<AlgoSeries>,
}

impl SeriesMap {
    /// Group samples by algorithm name
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut series: Vec<AlgoSeries> = Vec::new();

        for sample in samples {
            match series.iter_mut().find(|s| s.algorithm == sample.algorithm) {
                Some(existing) => {
                    existing.sizes.push(sample.size);
                    existing.seconds.push(sample.seconds);
                }
                None => series.push(AlgoSeries {
                    algorithm: sample.algorithm.clone(),
                    sizes: vec![sample.size],
                    seconds: vec![sample.seconds],
                }),
            }
        }

        Self { series }
    }

    /// Iterate series in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, AlgoSeries> {
        self.series.iter()
    }

    /// Number of algorithms
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when no samples were grouped
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Sorted distinct sizes across all algorithms.
    ///
    /// The grouped bar panel uses this as its x axis; an algorithm
    /// without a measurement at one of these sizes gets no bar there.
    pub fn size_union(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .series
            .iter()
            .flat_map(|s| s.sizes.iter().copied())
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}
