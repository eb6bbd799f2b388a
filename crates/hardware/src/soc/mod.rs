//! System-on-chip components.
//!
//! The simulated system has a single flat memory and no devices.

/// Flat byte-addressable memory.
pub mod memory;
