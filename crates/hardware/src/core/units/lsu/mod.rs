//! Load/Store Unit (LSU).
//!
//! Translates load and store instructions into memory accesses: it computes
//! the effective address, selects the access width and extension, and
//! performs the access against [`Memory`].

use crate::common::{AccessWidth, SimError};
use crate::isa::instruction::Op;
use crate::soc::memory::Memory;

/// Shape of a load: how many bytes and how they are extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadKind {
    /// Bytes read.
    pub width: AccessWidth,
    /// Sign-extend (`true`) or zero-extend (`false`) to 32 bits.
    pub signed: bool,
}

/// Load/Store Unit.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Effective address of `base + offset`.
    ///
    /// The sum wraps at 32 bits and is then treated as an unsigned address, so
    /// a negative result lands at the top of the address space and is caught
    /// by the bounds check.
    pub const fn effective_address(base: i32, offset: i32) -> i64 {
        base.wrapping_add(offset) as u32 as i64
    }

    /// Load shape for a load instruction, or `None` for any other op.
    pub const fn load_kind(op: Op) -> Option<LoadKind> {
        let (width, signed) = match op {
            Op::Lb => (AccessWidth::Byte, true),
            Op::Lh => (AccessWidth::Half, true),
            Op::Lw => (AccessWidth::Word, true),
            Op::Lbu => (AccessWidth::Byte, false),
            Op::Lhu => (AccessWidth::Half, false),
            _ => return None,
        };
        Some(LoadKind { width, signed })
    }

    /// Store width for a store instruction, or `None` for any other op.
    pub const fn store_width(op: Op) -> Option<AccessWidth> {
        match op {
            Op::Sb => Some(AccessWidth::Byte),
            Op::Sh => Some(AccessWidth::Half),
            Op::Sw => Some(AccessWidth::Word),
            _ => None,
        }
    }

    /// Performs a load and returns the extended value.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if the access leaves memory.
    pub fn load(mem: &Memory, address: i64, kind: LoadKind) -> Result<i32, SimError> {
        if kind.signed {
            mem.local_read(address, kind.width)
        } else {
            mem.local_read_unsigned(address, kind.width).map(|v| v as i32)
        }
    }

    /// Performs a store and returns the zero-extended value it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if the access leaves memory; memory is
    /// unchanged in that case.
    pub fn store(
        mem: &mut Memory,
        address: i64,
        width: AccessWidth,
        value: i32,
    ) -> Result<u32, SimError> {
        mem.exchange(address, width, value)
    }
}
