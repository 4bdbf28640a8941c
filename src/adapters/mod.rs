//! # Adapters
//!
//! Swappable implementations of port traits:
//! - Store: CSV result file
//! - Plot: plotters-backed PNG charts
//! - Dataset: random number files for the algorithms to chew on

pub mod charts;
pub mod csv_store;
pub mod dataset;
