//! # Bench Engine
//!
//! The main orchestrator. Wires a dataset, an algorithm and a result
//! store together:
//!
//! - sorts are timed over a scratch copy so the dataset survives
//! - searches pre-sort a copy when the algorithm needs sorted input;
//!   only the search itself is timed
//! - runs that would take hours are estimated from a smaller measured
//!   run instead (see [`SortAlgo::estimation_base`])
//!
//! Every outcome is upserted into the store keyed by (algorithm, size).

use std::time::Instant;

use tracing::{debug, info};

use crate::core::sample::Sample;
use crate::core::search::SearchAlgo;
use crate::core::sort::{is_sorted, SortAlgo};
use crate::ports::{Store, StoreError};

/// Result type for bench runs
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors from bench runs
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Reading or writing the result store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An estimated run needs a measured base that is not in the store
    #[error(
        "estimating {algorithm} at size {size} requires a measured run at size {base}; \
         run the smaller benchmark first"
    )]
    MissingBase {
        /// Algorithm being estimated
        algorithm: String,
        /// Requested size
        size: usize,
        /// Required measured size
        base: usize,
    },
}

/// The bench engine
///
/// Orchestrates timing and result persistence with a unified API.
pub struct Bench {
    /// Result store (Store port)
    store: Box<dyn Store>,
}

impl Bench {
    /// Create a new engine over the given store
    pub fn new(store: Box<dyn Store>) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    // ========================================================================
    // SORT RUNS
    // ========================================================================

    /// Time one sorting algorithm over the dataset and record the sample.
    ///
    /// When the dataset is larger than the algorithm's feasible size,
    /// the time is extrapolated from the stored base measurement via
    /// the algorithm's growth class, and recorded like a measured run.
    pub fn run_sort(&mut self, algo: SortAlgo, data: &[u32]) -> BenchResult<Sample> {
        let size = data.len();

        if let Some(base) = algo.estimation_base(size) {
            return self.estimate_sort(algo, size, base);
        }

        let mut scratch = data.to_vec();
        let start = Instant::now();
        algo.run(&mut scratch);
        let seconds = start.elapsed().as_secs_f64();

        debug_assert!(is_sorted(&scratch));
        info!(algorithm = algo.name(), size, seconds, "sort measured");

        let sample = Sample::new(algo.name(), size, seconds);
        self.store.upsert(&sample)?;
        Ok(sample)
    }

    fn estimate_sort(&mut self, algo: SortAlgo, size: usize, base: usize) -> BenchResult<Sample> {
        let base_sample =
            self.store
                .get(algo.name(), base)?
                .ok_or_else(|| BenchError::MissingBase {
                    algorithm: algo.name().to_string(),
                    size,
                    base,
                })?;

        let factor = algo.complexity().scale(base, size);
        let seconds = base_sample.seconds * factor;
        info!(
            algorithm = algo.name(),
            size, base, factor, seconds, "sort estimated"
        );

        let sample = Sample::new(algo.name(), size, seconds);
        self.store.upsert(&sample)?;
        Ok(sample)
    }

    // ========================================================================
    // SEARCH RUNS
    // ========================================================================

    /// Time one search algorithm over the dataset and record the sample.
    ///
    /// Algorithms that need sorted input get a sorted copy; the sort is
    /// preparation and stays outside the timed window. Returns the
    /// sample and the position of the target, if found.
    pub fn run_search(
        &mut self,
        algo: SearchAlgo,
        data: &[u32],
        target: u32,
    ) -> BenchResult<(Sample, Option<usize>)> {
        let size = data.len();

        let sorted;
        let view: &[u32] = if algo.requires_sorted() {
            debug!(algorithm = algo.name(), size, "pre-sorting dataset copy");
            let mut copy = data.to_vec();
            copy.sort_unstable();
            sorted = copy;
            &sorted
        } else {
            data
        };

        let start = Instant::now();
        let position = algo.run(view, target);
        let seconds = start.elapsed().as_secs_f64();

        info!(
            algorithm = algo.name(),
            size,
            seconds,
            found = position.is_some(),
            "search measured"
        );

        let sample = Sample::new(algo.name(), size, seconds);
        self.store.upsert(&sample)?;
        Ok((sample, position))
    }
}
