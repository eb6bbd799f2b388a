//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional branch comparisons and computes control-transfer
//! targets. Branch and JAL targets are PC-relative; JALR targets are
//! register-relative with bit 0 cleared.

use crate::isa::instruction::Op;

/// Comparison performed by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchCond {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Signed less than.
    Lt,
    /// Signed greater than or equal.
    Ge,
    /// Unsigned less than.
    Ltu,
    /// Unsigned greater than or equal.
    Geu,
}

impl BranchCond {
    /// Maps a branch instruction to its condition, or `None` for any other op.
    pub const fn from_op(op: Op) -> Option<Self> {
        match op {
            Op::Beq => Some(Self::Eq),
            Op::Bne => Some(Self::Ne),
            Op::Blt => Some(Self::Lt),
            Op::Bge => Some(Self::Ge),
            Op::Bltu => Some(Self::Ltu),
            Op::Bgeu => Some(Self::Geu),
            _ => None,
        }
    }
}

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates `cond` on the two source register values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::bru::{BranchCond, Bru};
    ///
    /// assert!(Bru::taken(BranchCond::Lt, -1, 0));
    /// assert!(!Bru::taken(BranchCond::Ltu, -1, 0));
    /// ```
    pub const fn taken(cond: BranchCond, a: i32, b: i32) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => a < b,
            BranchCond::Ge => a >= b,
            BranchCond::Ltu => (a as u32) < (b as u32),
            BranchCond::Geu => (a as u32) >= (b as u32),
        }
    }

    /// Target of a PC-relative transfer (branches and JAL).
    pub const fn relative_target(pc: u32, offset: i32) -> u32 {
        pc.wrapping_add(offset as u32)
    }

    /// Target of JALR: `(base + offset)` with the least significant bit cleared.
    pub const fn jalr_target(base: i32, offset: i32) -> u32 {
        (base.wrapping_add(offset) as u32) & !1
    }
}
