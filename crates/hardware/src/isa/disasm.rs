//! Instruction Disassembler for RV32IM.
//!
//! Converts a decoded instruction into a human-readable mnemonic string for
//! trace output, step records and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rv32sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A00513), "addi a0, zero, 10");
//! ```

use crate::isa::abi;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionType, Op};

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: Option<usize>) -> &'static str {
    idx.and_then(abi::name).unwrap_or("x??")
}

/// Disassembles a raw 32-bit word.
///
/// Returns `"unknown (0x........)"` for words that do not decode.
pub fn disassemble(inst: u32) -> String {
    decode(inst).map_or_else(|_| format!("unknown ({inst:#010x})"), |d| format_instruction(&d))
}

/// Formats an already-decoded instruction.
pub fn format_instruction(inst: &Instruction) -> String {
    let p = &inst.params;
    let mn = inst.op.mnemonic();
    let imm = p.imm.unwrap_or(0);

    match inst.op {
        Op::Fence | Op::Ecall | Op::Ebreak => mn.to_string(),
        Op::Lb | Op::Lh | Op::Lw | Op::Lbu | Op::Lhu | Op::Jalr => {
            format!("{mn} {}, {imm}({})", xreg(p.rd), xreg(p.rs1))
        }
        _ => match inst.itype {
            InstructionType::R => {
                format!("{mn} {}, {}, {}", xreg(p.rd), xreg(p.rs1), xreg(p.rs2))
            }
            InstructionType::I => format!("{mn} {}, {}, {imm}", xreg(p.rd), xreg(p.rs1)),
            InstructionType::S => format!("{mn} {}, {imm}({})", xreg(p.rs2), xreg(p.rs1)),
            InstructionType::B => format!("{mn} {}, {}, {imm}", xreg(p.rs1), xreg(p.rs2)),
            InstructionType::U => {
                format!("{mn} {}, {:#x}", xreg(p.rd), (imm as u32) >> 12)
            }
            InstructionType::J => format!("{mn} {}, {imm}", xreg(p.rd)),
        },
    }
}
