//! # algobench - Algorithm Benchmark Suite
//!
//! A benchmark harness for classic sorting and search algorithms.
//! It times runs over generated datasets, keeps results in a CSV store,
//! and renders PNG charts summarizing execution times.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       algobench                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure logic, no I/O)                                  │
//! │    Sample, SeriesMap, Complexity, sort, search              │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Store, Plot                                              │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Store: CSV file                                          │
//! │    Plot: plotters (ranking bars, scaling curves)            │
//! │    Dataset: random number files                             │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Bench - times a run, records the sample                  │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use algobench::{Bench, CsvStore, SortAlgo};
//!
//! let data = algobench::adapters::dataset::load("data_10k.txt".as_ref())?;
//!
//! let mut bench = Bench::new(Box::new(CsvStore::new("sorting_result.csv")));
//! let sample = bench.run_sort(SortAlgo::Quick, &data)?;
//!
//! println!("{} took {:.6} s", sample.algorithm, sample.seconds);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure logic, no I/O
/// Contains: Sample, SeriesMap, Complexity, sorting and search algorithms
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Store trait, Plot trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: csv store, plotters charts, dataset files
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Bench main struct
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::config::ChartStyle;
pub use crate::core::sample::{rank_descending, Sample};
pub use crate::core::scaling::Complexity;
pub use crate::core::search::SearchAlgo;
pub use crate::core::series::{AlgoSeries, SeriesMap};
pub use crate::core::sort::{SortAlgo, UnknownAlgorithm};

// Port traits
pub use crate::ports::{Plot, PlotError, PlotResult, Store, StoreError, StoreResult};

// Adapters
pub use crate::adapters::charts::PlottersCharts;
pub use crate::adapters::csv_store::CsvStore;
pub use crate::adapters::dataset::DatasetError;

// Engine
pub use crate::engine::{Bench, BenchError, BenchResult};
