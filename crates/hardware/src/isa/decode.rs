//! RV32IM Instruction Decoder.
//!
//! Turns a fetched 32-bit word into an [`Instruction`]: the opcode selects the
//! encoding format, the function fields select the operation, and the
//! immediate is reassembled from its format-specific bit positions and
//! sign-extended. Decoding is a pure function of the word.

use crate::common::DecodeError;
use crate::isa::instruction::{Instruction, InstructionBits, InstructionType, Op, Params};
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes};
use crate::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

/// Width of an instruction word in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Number of significant bits in each immediate before sign extension.
const I_IMM_BITS: u32 = 12;
const S_IMM_BITS: u32 = 12;
const B_IMM_BITS: u32 = 13;
const J_IMM_BITS: u32 = 21;

/// Low 12 bits of a U-type word are `rd` and the opcode, never immediate.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Shift amounts occupy the `rs2` slot of an immediate shift.
const SHAMT_MASK: u32 = 0x1F;

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] when bits [6:0] match no RV32IM
/// opcode, and [`DecodeError::UnknownFunction`] when the opcode is known but
/// `funct3`/`funct7` select nothing.
pub fn decode(inst: u32) -> Result<Instruction, DecodeError> {
    let opcode = inst.opcode();
    let funct3 = inst.funct3();
    let funct7 = inst.funct7();

    let itype = format_of(opcode).ok_or(DecodeError::UnknownOpcode(opcode))?;
    let op = select_op(inst, opcode, funct3, funct7).ok_or(DecodeError::UnknownFunction {
        opcode,
        funct3,
        funct7,
    })?;

    let rd = Some(inst.rd());
    let rs1 = Some(inst.rs1());
    let rs2 = Some(inst.rs2());

    let params = match itype {
        InstructionType::R => Params {
            rd,
            rs1,
            rs2,
            imm: None,
        },
        InstructionType::I => {
            let imm = if op.is_immediate_shift() {
                (inst.rs2() as u32 & SHAMT_MASK) as i32
            } else {
                decode_i_type_imm(inst)
            };
            Params {
                rd,
                rs1,
                rs2: None,
                imm: Some(imm),
            }
        }
        InstructionType::S => Params {
            rd: None,
            rs1,
            rs2,
            imm: Some(decode_s_type_imm(inst)),
        },
        InstructionType::B => Params {
            rd: None,
            rs1,
            rs2,
            imm: Some(decode_b_type_imm(inst)),
        },
        InstructionType::U => Params {
            rd,
            rs1: None,
            rs2: None,
            imm: Some(decode_u_type_imm(inst)),
        },
        InstructionType::J => Params {
            rd,
            rs1: None,
            rs2: None,
            imm: Some(decode_j_type_imm(inst)),
        },
    };

    Ok(Instruction {
        raw: inst,
        itype,
        op,
        opcode,
        funct3,
        funct7,
        params,
    })
}

/// Maps a major opcode to the format its instructions use.
pub const fn format_of(opcode: u32) -> Option<InstructionType> {
    match opcode {
        opcodes::OP_REG => Some(InstructionType::R),
        opcodes::OP_IMM
        | opcodes::OP_LOAD
        | opcodes::OP_JALR
        | opcodes::OP_MISC_MEM
        | opcodes::OP_SYSTEM => Some(InstructionType::I),
        opcodes::OP_STORE => Some(InstructionType::S),
        opcodes::OP_BRANCH => Some(InstructionType::B),
        opcodes::OP_LUI | opcodes::OP_AUIPC => Some(InstructionType::U),
        opcodes::OP_JAL => Some(InstructionType::J),
        _ => None,
    }
}

/// Selects the operation from the opcode and function fields.
const fn select_op(inst: u32, opcode: u32, funct3: u32, funct7: u32) -> Option<Op> {
    let op = match opcode {
        opcodes::OP_LUI => Op::Lui,
        opcodes::OP_AUIPC => Op::Auipc,
        opcodes::OP_JAL => Op::Jal,
        opcodes::OP_JALR if funct3 == f3::JALR => Op::Jalr,
        opcodes::OP_BRANCH => match funct3 {
            f3::BEQ => Op::Beq,
            f3::BNE => Op::Bne,
            f3::BLT => Op::Blt,
            f3::BGE => Op::Bge,
            f3::BLTU => Op::Bltu,
            f3::BGEU => Op::Bgeu,
            _ => return None,
        },
        opcodes::OP_LOAD => match funct3 {
            f3::LB => Op::Lb,
            f3::LH => Op::Lh,
            f3::LW => Op::Lw,
            f3::LBU => Op::Lbu,
            f3::LHU => Op::Lhu,
            _ => return None,
        },
        opcodes::OP_STORE => match funct3 {
            f3::SB => Op::Sb,
            f3::SH => Op::Sh,
            f3::SW => Op::Sw,
            _ => return None,
        },
        opcodes::OP_IMM => match (funct3, funct7) {
            (f3::ADD_SUB, _) => Op::Addi,
            (f3::SLT, _) => Op::Slti,
            (f3::SLTU, _) => Op::Sltiu,
            (f3::XOR, _) => Op::Xori,
            (f3::OR, _) => Op::Ori,
            (f3::AND, _) => Op::Andi,
            (f3::SLL, f7::DEFAULT) => Op::Slli,
            (f3::SRL_SRA, f7::DEFAULT) => Op::Srli,
            (f3::SRL_SRA, f7::SRA) => Op::Srai,
            _ => return None,
        },
        opcodes::OP_REG if funct7 == m_op::M_EXTENSION => match funct3 {
            m_f3::MUL => Op::Mul,
            m_f3::MULH => Op::Mulh,
            m_f3::MULHSU => Op::Mulhsu,
            m_f3::MULHU => Op::Mulhu,
            m_f3::DIV => Op::Div,
            m_f3::DIVU => Op::Divu,
            m_f3::REM => Op::Rem,
            m_f3::REMU => Op::Remu,
            _ => return None,
        },
        opcodes::OP_REG => match (funct3, funct7) {
            (f3::ADD_SUB, f7::DEFAULT) => Op::Add,
            (f3::ADD_SUB, f7::SUB) => Op::Sub,
            (f3::SLL, f7::DEFAULT) => Op::Sll,
            (f3::SLT, f7::DEFAULT) => Op::Slt,
            (f3::SLTU, f7::DEFAULT) => Op::Sltu,
            (f3::XOR, f7::DEFAULT) => Op::Xor,
            (f3::SRL_SRA, f7::DEFAULT) => Op::Srl,
            (f3::SRL_SRA, f7::SRA) => Op::Sra,
            (f3::OR, f7::DEFAULT) => Op::Or,
            (f3::AND, f7::DEFAULT) => Op::And,
            _ => return None,
        },
        opcodes::OP_MISC_MEM if funct3 == f3::FENCE => Op::Fence,
        opcodes::OP_SYSTEM => match inst {
            opcodes::ECALL => Op::Ecall,
            opcodes::EBREAK => Op::Ebreak,
            _ => return None,
        },
        _ => return None,
    };
    Some(op)
}

/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
///
/// The arithmetic shift of the whole word sign-extends from bit 31 in one step.
const fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> (INSTRUCTION_WIDTH - I_IMM_BITS)
}

/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
const fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> 7) & 0x1F;
    let high = (inst >> 25) & 0x7F;
    sign_extend((high << 5) | low, S_IMM_BITS)
}

/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
///
/// Bit 0 of the offset is implicit and always zero.
const fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> 7) & 0x1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bit_12 = (inst >> 31) & 0x1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// U-Type format: `imm[31:12] | rd | opcode`.
///
/// The immediate already sits in its final position; bit 31 is its sign.
const fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
///
/// Bit 0 of the offset is implicit and always zero.
const fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 0x1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = (inst >> 31) & 0x1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` bits of `val` to a full 32-bit signed integer.
const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (val as i32) << shift >> shift
}
