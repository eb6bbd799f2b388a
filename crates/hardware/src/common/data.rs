//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Reporting:** Tagging out-of-bounds errors with the kind of access that failed.
//! 2. **Width Selection:** Choosing how many bytes a load, store or display read touches.

use serde::Serialize;

use super::error::SimError;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AccessType {
    /// Instruction fetch at the program counter.
    Fetch,

    /// Data read access (loads and observer reads).
    Read,

    /// Data write access (stores and program loading).
    Write,
}

/// Width of a single memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessWidth {
    /// One byte (LB, LBU, SB).
    Byte,
    /// Two bytes (LH, LHU, SH).
    Half,
    /// Four bytes (LW, SW, instruction fetch).
    Word,
}

impl AccessWidth {
    /// Number of bytes covered by an access of this width.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Number of bits covered by an access of this width.
    #[inline]
    pub const fn bits(self) -> u32 {
        (self.bytes() * 8) as u32
    }

    /// Mask selecting the low bytes an access of this width covers.
    #[inline]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0xFF,
            Self::Half => 0xFFFF,
            Self::Word => u32::MAX,
        }
    }
}

impl TryFrom<usize> for AccessWidth {
    type Error = SimError;

    fn try_from(byte_count: usize) -> Result<Self, Self::Error> {
        match byte_count {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Half),
            4 => Ok(Self::Word),
            other => Err(SimError::InvalidWidth(other)),
        }
    }
}
