

/// End-to-end stepping and the run loop.
pub mod simulator;
