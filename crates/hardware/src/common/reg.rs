//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 integer registers of
//! an RV32 hart. It provides:
//! 1. **Storage:** 32 signed 32-bit registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** `x0` always reads as zero and silently drops writes.
//! 3. **Index Checking:** Indices outside `0..=31` are reported as `IndexOutOfRange`.

use std::fmt;

use super::constants::NUM_REGS;
use super::error::SimError;
use crate::isa::abi::REG_SP;

/// The integer register file of a single hart.
///
/// Register `x0` is hardwired to zero. Any other register, including the
/// conventional stack pointer `x2`, may be overwritten by any instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IndexOutOfRange`] if `idx > 31`.
    pub fn read(&self, idx: usize) -> Result<i32, SimError> {
        match idx {
            0 => Ok(0),
            _ => self
                .regs
                .get(idx)
                .copied()
                .ok_or(SimError::IndexOutOfRange(idx)),
        }
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are discarded.
    /// * `val` - The value to store.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IndexOutOfRange`] if `idx > 31`.
    pub fn write(&mut self, idx: usize, val: i32) -> Result<(), SimError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(SimError::IndexOutOfRange(idx))?;
        if idx != 0 {
            *slot = val;
        }
        Ok(())
    }

    /// Copies all 32 register values out, `x0` included as zero.
    pub const fn values(&self) -> [i32; NUM_REGS] {
        self.regs
    }

    /// Zeroes every register.
    pub const fn clear(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Sets the conventional stack pointer, `x2`.
    pub const fn set_sp(&mut self, val: i32) {
        self.regs[REG_SP] = val;
    }
}

impl fmt::Display for RegisterFile {
    /// Displays registers in pairs with hexadecimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
