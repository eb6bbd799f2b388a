//! # Unit Components
//!
//! Per-module suites, mirroring the crate's module tree.


/// Configuration parsing and validation.
pub mod config;



/// Simulator, observers, snapshots and loading.
pub mod sim;


/// Statistics collection.
pub mod stats;
