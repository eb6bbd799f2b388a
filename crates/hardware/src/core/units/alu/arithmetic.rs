//! ALU arithmetic operations.
//!
//! Implements 32-bit integer addition, subtraction, multiplication and
//! division, including the full M-extension multiply/divide family.
//!
//! Results wrap modulo 2^32. Division never traps: dividing by zero and the
//! single signed overflow case (`i32::MIN / -1`) produce fixed results.

use super::AluOp;

/// Number of bits in a word (used for high-multiply shift).
const WORD_BITS: u32 = 32;

/// Quotient of any division by zero.
const DIV_BY_ZERO_QUOTIENT: u32 = u32::MAX;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Mulh => ((i64::from(a as i32) * i64::from(b as i32)) >> WORD_BITS) as u32,
        // Signed × unsigned: the product of an i32 and a u32 always fits in an i64.
        AluOp::Mulhsu => ((i64::from(a as i32) * i64::from(b)) >> WORD_BITS) as u32,
        AluOp::Mulhu => ((u64::from(a) * u64::from(b)) >> WORD_BITS) as u32,
        AluOp::Div => {
            if b == 0 {
                DIV_BY_ZERO_QUOTIENT
            } else {
                // wrapping_div returns the dividend for i32::MIN / -1.
                (a as i32).wrapping_div(b as i32) as u32
            }
        }
        AluOp::Divu => a.checked_div(b).unwrap_or(DIV_BY_ZERO_QUOTIENT),
        AluOp::Rem => {
            if b == 0 {
                a
            } else {
                // wrapping_rem returns 0 for i32::MIN % -1.
                (a as i32).wrapping_rem(b as i32) as u32
            }
        }
        AluOp::Remu => a.checked_rem(b).unwrap_or(a),
        _ => 0,
    }
}
