//! Core processor implementation.
//!
//! This module contains the CPU's architectural state and step logic together
//! with the stateless functional units it executes instructions on.

/// CPU core implementation and execution step.
pub mod cpu;

/// Execution units (ALU, BRU, LSU).
pub mod units;

pub use self::cpu::Cpu;
