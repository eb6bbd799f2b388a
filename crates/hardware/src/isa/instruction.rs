//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the fixed-position fields of a 32-bit
//! RISC-V instruction, and the decoded `Instruction` record produced by
//! [`decode`](crate::isa::decode::decode).

use std::fmt;

use serde::Serialize;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    ///
    /// For immediate shifts the same bits hold the shift amount.
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// The six base encoding formats.
///
/// The format fixes which operand fields an instruction carries and how its
/// immediate is scattered across the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InstructionType {
    /// Register-register: `rd`, `rs1`, `rs2`.
    R,
    /// Short immediate: `rd`, `rs1`, 12-bit `imm`.
    I,
    /// Store: `rs1`, `rs2`, split 12-bit `imm`.
    S,
    /// Branch: `rs1`, `rs2`, shuffled 13-bit even `imm`.
    B,
    /// Upper immediate: `rd`, `imm[31:12]`.
    U,
    /// Jump: `rd`, shuffled 21-bit even `imm`.
    J,
}

impl fmt::Display for InstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::R => "R",
            Self::I => "I",
            Self::S => "S",
            Self::B => "B",
            Self::U => "U",
            Self::J => "J",
        };
        f.write_str(tag)
    }
}

/// Operand fields of a decoded instruction.
///
/// Only the fields the instruction's format defines are populated:
///
/// | Format | `rd` | `rs1` | `rs2` | `imm` |
/// |--------|------|-------|-------|-------|
/// | R      | yes  | yes   | yes   |       |
/// | I      | yes  | yes   |       | yes   |
/// | S, B   |      | yes   | yes   | yes   |
/// | U, J   | yes  |       |       | yes   |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    /// Destination register index.
    pub rd: Option<usize>,
    /// First source register index.
    pub rs1: Option<usize>,
    /// Second source register index.
    pub rs2: Option<usize>,
    /// Sign-extended immediate (for immediate shifts, the 5-bit shift amount).
    pub imm: Option<i32>,
}

impl Params {
    /// Source registers read by the instruction, in `rs1`, `rs2` order.
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        self.rs1.into_iter().chain(self.rs2)
    }
}

/// Broad category of an operation, used for statistics and highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OpClass {
    /// Register or immediate arithmetic/logic, including multiply/divide.
    Alu,
    /// LUI and AUIPC.
    UpperImmediate,
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// Conditional branches.
    Branch,
    /// JAL and JALR.
    Jump,
    /// FENCE, ECALL and EBREAK.
    System,
}

/// Every operation the simulator executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Op {
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
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
    Fence,
    Ecall,
    Ebreak,
}

impl Op {
    /// Assembly mnemonic, lower case.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
            Self::Fence => "fence",
            Self::Ecall => "ecall",
            Self::Ebreak => "ebreak",
        }
    }

    /// Category of the operation.
    pub const fn class(self) -> OpClass {
        match self {
            Self::Lui | Self::Auipc => OpClass::UpperImmediate,
            Self::Jal | Self::Jalr => OpClass::Jump,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => {
                OpClass::Branch
            }
            Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu => OpClass::Load,
            Self::Sb | Self::Sh | Self::Sw => OpClass::Store,
            Self::Fence | Self::Ecall | Self::Ebreak => OpClass::System,
            _ => OpClass::Alu,
        }
    }

    /// Whether the operation is one of the immediate shifts, whose immediate
    /// is a 5-bit shift amount rather than a signed 12-bit value.
    pub const fn is_immediate_shift(self) -> bool {
        matches!(self, Self::Slli | Self::Srli | Self::Srai)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded 32-bit instruction.
///
/// Created fresh by [`decode`](crate::isa::decode::decode) on every fetch and
/// never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Encoding format.
    pub itype: InstructionType,
    /// Operation selected by the opcode and function fields.
    pub op: Op,
    /// Bits [6:0].
    pub opcode: u32,
    /// Bits [14:12].
    pub funct3: u32,
    /// Bits [31:25].
    pub funct7: u32,
    /// Operand fields populated for `itype`.
    pub params: Params,
}

impl Instruction {
    /// Destination register, if the instruction writes one and it is not `x0`.
    pub fn written_register(&self) -> Option<usize> {
        self.params.rd.filter(|&rd| rd != 0)
    }

    /// Whether retiring this instruction signals a halt request to the driver.
    pub const fn is_halt(&self) -> bool {
        matches!(self.op, Op::Ecall | Op::Ebreak)
    }
}
