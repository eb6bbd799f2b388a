//! RV32IM Instruction Encoder.
//!
//! The inverse of [`decode`](crate::isa::decode::decode): packs register
//! indices, function codes and immediates back into 32-bit words. Used to
//! build programs in tests and by drivers that do not carry an assembler.
//!
//! Register arguments are masked to 5 bits and immediates to the width their
//! format can hold; out-of-range values are truncated, not rejected.

use crate::isa::instruction::{Instruction, InstructionType};
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};
use crate::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

const REG_MASK: u32 = 0x1F;

#[inline]
const fn reg(idx: usize) -> u32 {
    idx as u32 & REG_MASK
}

/// Encodes an R-type instruction.
pub const fn r_type(
    opcode: u32,
    rd: usize,
    funct3: u32,
    rs1: usize,
    rs2: usize,
    funct7: u32,
) -> u32 {
    (funct7 & 0x7F) << 25
        | reg(rs2) << 20
        | reg(rs1) << 15
        | (funct3 & 0x7) << 12
        | reg(rd) << 7
        | (opcode & 0x7F)
}

/// Encodes an I-type instruction; `imm` keeps its low 12 bits.
pub const fn i_type(opcode: u32, rd: usize, funct3: u32, rs1: usize, imm: i32) -> u32 {
    ((imm as u32) & 0xFFF) << 20
        | reg(rs1) << 15
        | (funct3 & 0x7) << 12
        | reg(rd) << 7
        | (opcode & 0x7F)
}

/// Encodes an S-type instruction.
pub const fn s_type(opcode: u32, funct3: u32, rs1: usize, rs2: usize, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 5) & 0x7F) << 25
        | reg(rs2) << 20
        | reg(rs1) << 15
        | (funct3 & 0x7) << 12
        | (v & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encodes a B-type instruction; bit 0 of `imm` is dropped.
pub const fn b_type(opcode: u32, funct3: u32, rs1: usize, rs2: usize, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 12) & 0x1) << 31
        | ((v >> 5) & 0x3F) << 25
        | reg(rs2) << 20
        | reg(rs1) << 15
        | (funct3 & 0x7) << 12
        | ((v >> 1) & 0xF) << 8
        | ((v >> 11) & 0x1) << 7
        | (opcode & 0x7F)
}

/// Encodes a U-type instruction; `imm` is the full 32-bit value whose low
/// 12 bits are dropped.
pub const fn u_type(opcode: u32, rd: usize, imm: i32) -> u32 {
    (imm as u32 & 0xFFFF_F000) | reg(rd) << 7 | (opcode & 0x7F)
}

/// Encodes a J-type instruction; bit 0 of `imm` is dropped.
pub const fn j_type(opcode: u32, rd: usize, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 20) & 0x1) << 31
        | ((v >> 1) & 0x3FF) << 21
        | ((v >> 11) & 0x1) << 20
        | ((v >> 12) & 0xFF) << 12
        | reg(rd) << 7
        | (opcode & 0x7F)
}

/// Re-encodes a decoded instruction.
///
/// For every word `w` that decodes successfully, `encode(&decode(w)?) == w`.
pub fn encode(inst: &Instruction) -> u32 {
    let p = &inst.params;
    let rd = p.rd.unwrap_or(0);
    let rs1 = p.rs1.unwrap_or(0);
    let rs2 = p.rs2.unwrap_or(0);
    let imm = p.imm.unwrap_or(0);

    match inst.itype {
        InstructionType::R => r_type(inst.opcode, rd, inst.funct3, rs1, rs2, inst.funct7),
        InstructionType::I if inst.op.is_immediate_shift() => {
            let shifted = (inst.funct7 << 5) as i32 | (imm & 0x1F);
            i_type(inst.opcode, rd, inst.funct3, rs1, shifted)
        }
        InstructionType::I => i_type(inst.opcode, rd, inst.funct3, rs1, imm),
        InstructionType::S => s_type(inst.opcode, inst.funct3, rs1, rs2, imm),
        InstructionType::B => b_type(inst.opcode, inst.funct3, rs1, rs2, imm),
        InstructionType::U => u_type(inst.opcode, rd, imm),
        InstructionType::J => j_type(inst.opcode, rd, imm),
    }
}

// --- Upper immediates and jumps ---

/// `lui rd, upper` where `upper` is the 20-bit value placed in bits [31:12].
pub const fn lui(rd: usize, upper: u32) -> u32 {
    u_type(op::OP_LUI, rd, (upper << 12) as i32)
}

/// `auipc rd, upper` where `upper` is the 20-bit value placed in bits [31:12].
pub const fn auipc(rd: usize, upper: u32) -> u32 {
    u_type(op::OP_AUIPC, rd, (upper << 12) as i32)
}

/// `jal rd, offset`.
pub const fn jal(rd: usize, offset: i32) -> u32 {
    j_type(op::OP_JAL, rd, offset)
}

/// `jalr rd, offset(rs1)`.
pub const fn jalr(rd: usize, rs1: usize, offset: i32) -> u32 {
    i_type(op::OP_JALR, rd, f3::JALR, rs1, offset)
}

// --- Branches ---

/// `beq rs1, rs2, offset`.
pub const fn beq(rs1: usize, rs2: usize, offset: i32) -> u32 {
    b_type(op::OP_BRANCH, f3::BEQ, rs1, rs2, offset)
}

/// `bne rs1, rs2, offset`.
pub const fn bne(rs1: usize, rs2: usize, offset: i32) -> u32 {
    b_type(op::OP_BRANCH, f3::BNE, rs1, rs2, offset)
}

/// `blt rs1, rs2, offset`.
pub const fn blt(rs1: usize, rs2: usize, offset: i32) -> u32 {
    b_type(op::OP_BRANCH, f3::BLT, rs1, rs2, offset)
}

/// `bge rs1, rs2, offset`.
pub const fn bge(rs1: usize, rs2: usize, offset: i32) -> u32 {
    b_type(op::OP_BRANCH, f3::BGE, rs1, rs2, offset)
}

/// `bltu rs1, rs2, offset`.
pub const fn bltu(rs1: usize, rs2: usize, offset: i32) -> u32 {
    b_type(op::OP_BRANCH, f3::BLTU, rs1, rs2, offset)
}

/// `bgeu rs1, rs2, offset`.
pub const fn bgeu(rs1: usize, rs2: usize, offset: i32) -> u32 {
    b_type(op::OP_BRANCH, f3::BGEU, rs1, rs2, offset)
}

// --- Loads and stores ---

/// `lb rd, offset(rs1)`.
pub const fn lb(rd: usize, rs1: usize, offset: i32) -> u32 {
    i_type(op::OP_LOAD, rd, f3::LB, rs1, offset)
}

/// `lh rd, offset(rs1)`.
pub const fn lh(rd: usize, rs1: usize, offset: i32) -> u32 {
    i_type(op::OP_LOAD, rd, f3::LH, rs1, offset)
}

/// `lw rd, offset(rs1)`.
pub const fn lw(rd: usize, rs1: usize, offset: i32) -> u32 {
    i_type(op::OP_LOAD, rd, f3::LW, rs1, offset)
}

/// `lbu rd, offset(rs1)`.
pub const fn lbu(rd: usize, rs1: usize, offset: i32) -> u32 {
    i_type(op::OP_LOAD, rd, f3::LBU, rs1, offset)
}

/// `lhu rd, offset(rs1)`.
pub const fn lhu(rd: usize, rs1: usize, offset: i32) -> u32 {
    i_type(op::OP_LOAD, rd, f3::LHU, rs1, offset)
}

/// `sb rs2, offset(rs1)`.
pub const fn sb(rs2: usize, rs1: usize, offset: i32) -> u32 {
    s_type(op::OP_STORE, f3::SB, rs1, rs2, offset)
}

/// `sh rs2, offset(rs1)`.
pub const fn sh(rs2: usize, rs1: usize, offset: i32) -> u32 {
    s_type(op::OP_STORE, f3::SH, rs1, rs2, offset)
}

/// `sw rs2, offset(rs1)`.
pub const fn sw(rs2: usize, rs1: usize, offset: i32) -> u32 {
    s_type(op::OP_STORE, f3::SW, rs1, rs2, offset)
}

// --- Immediate arithmetic ---

/// `addi rd, rs1, imm`.
pub const fn addi(rd: usize, rs1: usize, imm: i32) -> u32 {
    i_type(op::OP_IMM, rd, f3::ADD_SUB, rs1, imm)
}

/// `slti rd, rs1, imm`.
pub const fn slti(rd: usize, rs1: usize, imm: i32) -> u32 {
    i_type(op::OP_IMM, rd, f3::SLT, rs1, imm)
}

/// `sltiu rd, rs1, imm`.
pub const fn sltiu(rd: usize, rs1: usize, imm: i32) -> u32 {
    i_type(op::OP_IMM, rd, f3::SLTU, rs1, imm)
}

/// `xori rd, rs1, imm`.
pub const fn xori(rd: usize, rs1: usize, imm: i32) -> u32 {
    i_type(op::OP_IMM, rd, f3::XOR, rs1, imm)
}

/// `ori rd, rs1, imm`.
pub const fn ori(rd: usize, rs1: usize, imm: i32) -> u32 {
    i_type(op::OP_IMM, rd, f3::OR, rs1, imm)
}

/// `andi rd, rs1, imm`.
pub const fn andi(rd: usize, rs1: usize, imm: i32) -> u32 {
    i_type(op::OP_IMM, rd, f3::AND, rs1, imm)
}

/// `slli rd, rs1, shamt`.
pub const fn slli(rd: usize, rs1: usize, shamt: u32) -> u32 {
    i_type(op::OP_IMM, rd, f3::SLL, rs1, (shamt & 0x1F) as i32)
}

/// `srli rd, rs1, shamt`.
pub const fn srli(rd: usize, rs1: usize, shamt: u32) -> u32 {
    i_type(op::OP_IMM, rd, f3::SRL_SRA, rs1, (shamt & 0x1F) as i32)
}

/// `srai rd, rs1, shamt`.
pub const fn srai(rd: usize, rs1: usize, shamt: u32) -> u32 {
    i_type(
        op::OP_IMM,
        rd,
        f3::SRL_SRA,
        rs1,
        (f7::SRA << 5 | (shamt & 0x1F)) as i32,
    )
}

// --- Register-register arithmetic ---

macro_rules! reg_reg {
    ($($(#[$doc:meta])* $name:ident => ($funct3:expr, $funct7:expr);)*) => {
        $(
            $(#[$doc])*
            pub const fn $name(rd: usize, rs1: usize, rs2: usize) -> u32 {
                r_type(op::OP_REG, rd, $funct3, rs1, rs2, $funct7)
            }
        )*
    };
}

reg_reg! {
    /// `add rd, rs1, rs2`.
    add => (f3::ADD_SUB, f7::DEFAULT);
    /// `sub rd, rs1, rs2`.
    sub => (f3::ADD_SUB, f7::SUB);
    /// `sll rd, rs1, rs2`.
    sll => (f3::SLL, f7::DEFAULT);
    /// `slt rd, rs1, rs2`.
    slt => (f3::SLT, f7::DEFAULT);
    /// `sltu rd, rs1, rs2`.
    sltu => (f3::SLTU, f7::DEFAULT);
    /// `xor rd, rs1, rs2`.
    xor => (f3::XOR, f7::DEFAULT);
    /// `srl rd, rs1, rs2`.
    srl => (f3::SRL_SRA, f7::DEFAULT);
    /// `sra rd, rs1, rs2`.
    sra => (f3::SRL_SRA, f7::SRA);
    /// `or rd, rs1, rs2`.
    or => (f3::OR, f7::DEFAULT);
    /// `and rd, rs1, rs2`.
    and => (f3::AND, f7::DEFAULT);
    /// `mul rd, rs1, rs2`.
    mul => (m_f3::MUL, m_op::M_EXTENSION);
    /// `mulh rd, rs1, rs2`.
    mulh => (m_f3::MULH, m_op::M_EXTENSION);
    /// `mulhsu rd, rs1, rs2`.
    mulhsu => (m_f3::MULHSU, m_op::M_EXTENSION);
    /// `mulhu rd, rs1, rs2`.
    mulhu => (m_f3::MULHU, m_op::M_EXTENSION);
    /// `div rd, rs1, rs2`.
    div => (m_f3::DIV, m_op::M_EXTENSION);
    /// `divu rd, rs1, rs2`.
    divu => (m_f3::DIVU, m_op::M_EXTENSION);
    /// `rem rd, rs1, rs2`.
    rem => (m_f3::REM, m_op::M_EXTENSION);
    /// `remu rd, rs1, rs2`.
    remu => (m_f3::REMU, m_op::M_EXTENSION);
}

// --- System ---

/// `fence` (iorw, iorw).
pub const fn fence() -> u32 {
    i_type(op::OP_MISC_MEM, 0, f3::FENCE, 0, 0x0FF)
}

/// `ecall`.
pub const fn ecall() -> u32 {
    op::ECALL
}

/// `ebreak`.
pub const fn ebreak() -> u32 {
    op::EBREAK
}

/// `nop` (`addi x0, x0, 0`).
pub const fn nop() -> u32 {
    addi(0, 0, 0)
}
