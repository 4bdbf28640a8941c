//! # Store Port
//!
//! Contract for persisting benchmark samples between runs, keyed by
//! (algorithm, size).

use crate::core::sample::Sample;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("results file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The results file could not be read as CSV
    #[error("results file is not readable CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row had the right shape but a non-numeric field
    #[error("invalid {field} value {value:?}")]
    Parse {
        /// Which field failed ("size" or "seconds")
        field: &'static str,
        /// The offending text
        value: String,
    },
}

/// Persistence of benchmark samples
pub trait Store {
    /// Load every stored sample, in file order.
    ///
    /// Rows with fewer than three columns are skipped.
    fn load(&self) -> StoreResult<Vec<Sample>>;

    /// Look up the sample for (algorithm, size), if recorded
    fn get(&self, algorithm: &str, size: usize) -> StoreResult<Option<Sample>>;

    /// Insert the sample, replacing any existing row with the same
    /// (algorithm, size) in place; other rows keep their order.
    fn upsert(&mut self, sample: &Sample) -> StoreResult<()>;
}
