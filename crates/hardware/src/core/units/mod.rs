//! Execution units.
//!
//! Stateless functional units used by the CPU's execute step:
//! - [`alu`]: integer arithmetic, logic, shifts and multiply/divide.
//! - [`bru`]: branch conditions and jump targets.
//! - [`lsu`]: load/store address generation and memory access.

/// Arithmetic Logic Unit.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;

/// Load/Store Unit.
pub mod lsu;
