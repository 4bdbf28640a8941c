//! # Ports
//!
//! Trait contracts for adapters.
//!
//! - `Store`: where benchmark samples live between runs
//! - `Plot`: how samples become chart images
//!
//! Adapters can be swapped without changing core logic or the engine.

mod plot;
mod store;

pub use plot::{Plot, PlotError, PlotResult};
pub use store::{Store, StoreError, StoreResult};
