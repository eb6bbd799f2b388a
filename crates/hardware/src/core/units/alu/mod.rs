//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute step.
//! It handles standard arithmetic, logical operations, and shifts on
//! 32-bit operands. It also implements the Multiply/Divide (M) extension
//! operations.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra
//!
//! Operands and results are raw 32-bit patterns. Signed operations reinterpret
//! them as two's complement; nothing here can fail or trap.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::instruction::Op;

/// ALU operation selected by the decoded instruction.
///
/// Register-register and register-immediate forms share one variant; the
/// caller picks the second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum AluOp {
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,
}

impl AluOp {
    /// Maps an arithmetic or logic instruction to its ALU operation.
    ///
    /// Returns `None` for instructions that do not use the ALU result
    /// directly (loads, stores, branches, jumps, upper immediates, system).
    pub const fn from_op(op: Op) -> Option<Self> {
        let alu = match op {
            Op::Add | Op::Addi => Self::Add,
            Op::Sub => Self::Sub,
            Op::Sll | Op::Slli => Self::Sll,
            Op::Slt | Op::Slti => Self::Slt,
            Op::Sltu | Op::Sltiu => Self::Sltu,
            Op::Xor | Op::Xori => Self::Xor,
            Op::Srl | Op::Srli => Self::Srl,
            Op::Sra | Op::Srai => Self::Sra,
            Op::Or | Op::Ori => Self::Or,
            Op::And | Op::Andi => Self::And,
            Op::Mul => Self::Mul,
            Op::Mulh => Self::Mulh,
            Op::Mulhsu => Self::Mulhsu,
            Op::Mulhu => Self::Mulhu,
            Op::Div => Self::Div,
            Op::Divu => Self::Divu,
            Op::Rem => Self::Rem,
            Op::Remu => Self::Remu,
            _ => return None,
        };
        Some(alu)
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements all RV32I integer arithmetic and logical operations and the
/// RV32M multiply/divide operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also used as shift amount; only bits [4:0] count)
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// // Addition wraps at 32 bits
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1), 0x8000_0000);
    ///
    /// // Logical shift left
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    ///
    /// // Signed comparison
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    ///
    /// // Division by zero yields all ones
    /// assert_eq!(Alu::execute(AluOp::Divu, 100, 0), u32::MAX);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Mulh
            | AluOp::Mulhsu
            | AluOp::Mulhu
            | AluOp::Div
            | AluOp::Divu
            | AluOp::Rem
            | AluOp::Remu => arithmetic::execute(op, a, b),

            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
