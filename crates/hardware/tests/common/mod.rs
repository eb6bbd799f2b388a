//! Shared test infrastructure.

/// Program and ELF image builders.
pub mod builder;

/// Simulator harness.
pub mod harness;

/// Mock implementations of simulator traits.
pub mod mocks;
