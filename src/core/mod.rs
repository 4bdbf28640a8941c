//! # Core
//!
//! Pure domain logic with no I/O:
//! - `Sample`: one benchmark measurement
//! - `SeriesMap`: samples grouped per algorithm for scaling charts
//! - `Complexity`: growth classes used to extrapolate infeasible runs
//! - `sort` / `search`: the algorithms under measurement
//! - `config`: chart dimensions

pub mod config;
pub mod sample;
pub mod scaling;
pub mod search;
pub mod series;
pub mod sort;
