//! ALU shift operations.
//!
//! Logical left, logical right and arithmetic right shifts. Only the low five
//! bits of the shift amount are used, so shifting by 32 is a shift by 0.

use super::AluOp;

/// Mask applied to the shift amount.
const SHAMT_MASK: u32 = 0x1F;

/// Executes a shift operation.
///
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
