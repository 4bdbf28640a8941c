//! # Engine
//!
//! The orchestration layer: runs an algorithm over a dataset, times it,
//! and records the sample in the store.

mod bench;

pub use bench::{Bench, BenchError, BenchResult};
