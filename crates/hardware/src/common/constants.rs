//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Architectural Constants:** Register count and instruction width.
//! 2. **Memory Defaults:** Default size of the flat physical memory.

/// Number of general-purpose integer registers (`x0`-`x31`).
pub const NUM_REGS: usize = 32;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Required alignment of every fetch address, in bytes.
pub const FETCH_ALIGNMENT: u32 = INSTRUCTION_SIZE;

/// Default size of simulated memory (64 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 64 * 1024;

/// Largest memory the 32-bit address space can reach (4 GiB).
pub const MAX_MEMORY_SIZE: usize = 1 << 32;
