//! Simulator error types.
//!
//! This module defines every failure the simulation core can surface to a driver:
//! 1. **Decode Errors:** Words whose opcode or function fields name no supported instruction.
//! 2. **Bounds Errors:** Memory accesses that leave `[0, size)`.
//! 3. **Index Errors:** Register indices outside `0..=31`.
//!
//! Arithmetic conditions the ISA defines as non-trapping (division by zero, signed
//! overflow, oversized shift amounts) are never errors.

use thiserror::Error;

use super::data::AccessType;

/// Reasons a 32-bit word fails to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Bits [6:0] match no supported major opcode.
    #[error("unknown opcode {0:#09b}")]
    UnknownOpcode(u32),

    /// The opcode is known but its function fields select no instruction.
    #[error(
        "unknown function for opcode {opcode:#09b} (funct3={funct3:#05b}, funct7={funct7:#09b})"
    )]
    UnknownFunction {
        /// Major opcode of the word.
        opcode: u32,
        /// `funct3` field of the word.
        funct3: u32,
        /// `funct7` field of the word (or the bits in that position).
        funct7: u32,
    },
}

/// Errors surfaced by the simulator to its driver.
///
/// Every variant is detected before the failing operation mutates any register
/// or memory state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The word fetched at `pc` is not a supported instruction.
    #[error("illegal instruction {raw:#010x} at pc {pc:#010x}: {source}")]
    Decode {
        /// Address the word was fetched from.
        pc: u32,
        /// The raw fetched word.
        raw: u32,
        /// Why decoding failed.
        source: DecodeError,
    },

    /// A memory access touched bytes outside `[0, size)`.
    #[error("{access:?} of {width} byte(s) at {address:#x} is outside memory [0, {size:#x})")]
    OutOfBounds {
        /// Kind of access that faulted.
        access: AccessType,
        /// First byte address of the access.
        address: i64,
        /// Number of bytes requested.
        width: usize,
        /// Size of the memory in bytes.
        size: usize,
    },

    /// The program counter is not a multiple of 4 at a fetch boundary.
    #[error("misaligned fetch at pc {0:#010x}")]
    MisalignedFetch(u32),

    /// A register index outside `0..=31` was used.
    #[error("register index {0} is outside x0..x31")]
    IndexOutOfRange(usize),

    /// A byte count other than 1, 2 or 4 was requested.
    #[error("unsupported access width of {0} bytes (expected 1, 2 or 4)")]
    InvalidWidth(usize),
}
