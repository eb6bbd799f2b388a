//! Main Execution Step.
//!
//! This module implements the single-instruction execution cycle of the CPU:
//! 1. **Fetch:** Read the word at `pc`.
//! 2. **Decode:** Turn the word into an [`Instruction`].
//! 3. **Execute:** Compute the result, the memory effect and the next `pc`.
//! 4. **Commit:** Write the destination register and advance `pc`.
//!
//! Every failure (misaligned or out-of-bounds fetch, decode error, load or
//! store out of bounds) happens before the register file or `pc` is touched,
//! and a failed store leaves memory unchanged, so a failed step leaves no trace.

use super::Cpu;
use crate::common::constants::{FETCH_ALIGNMENT, INSTRUCTION_SIZE};
use crate::common::SimError;
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru::{BranchCond, Bru};
use crate::core::units::lsu::Lsu;
use crate::isa::decode::decode;
use crate::isa::disasm;
use crate::isa::instruction::{Instruction, InstructionType, Op};
use crate::sim::record::{MemoryWrite, RegisterWrite, StepRecord};
use crate::soc::memory::Memory;

/// Result of executing one instruction, before it is committed.
struct Effect {
    rd_value: Option<i32>,
    memory_write: Option<MemoryWrite>,
    next_pc: u32,
    redirected: bool,
}

impl Cpu {
    /// Advances the simulation by exactly one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MisalignedFetch`] if `pc` is not a multiple of 4,
    /// [`SimError::OutOfBounds`] if the fetch, a load or a store leaves
    /// memory, and [`SimError::Decode`] if the fetched word is not an RV32IM
    /// instruction. Registers, `pc` and memory are unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::isa::encode;
    /// use rv32sim_core::soc::memory::Memory;
    /// use rv32sim_core::{Config, Cpu};
    ///
    /// let config = Config::default();
    /// let mut mem = Memory::new(config.memory.size).unwrap();
    /// mem.load_program(&encode::addi(5, 0, 10).to_le_bytes(), 0).unwrap();
    ///
    /// let mut cpu = Cpu::new(&config);
    /// let record = cpu.step(&mut mem).unwrap();
    /// assert_eq!(cpu.regs.read(5).unwrap(), 10);
    /// assert_eq!((record.pc_before, record.pc_after), (0, 4));
    /// ```
    pub fn step(&mut self, mem: &mut Memory) -> Result<StepRecord, SimError> {
        let pc = self.pc;
        let record = self.try_step(mem).inspect_err(|err| {
            tracing::warn!(pc = format_args!("{pc:#010x}"), error = %err, "step failed");
        })?;

        if self.trace {
            tracing::trace!(
                pc = format_args!("{pc:#010x}"),
                raw = format_args!("{:#010x}", record.instruction.raw),
                asm = %disasm::format_instruction(&record.instruction),
                rd = ?record.register_write,
                "retired"
            );
        }

        self.last = Some(record);
        Ok(record)
    }

    fn try_step(&mut self, mem: &mut Memory) -> Result<StepRecord, SimError> {
        let pc = self.pc;
        if !pc.is_multiple_of(FETCH_ALIGNMENT) {
            return Err(SimError::MisalignedFetch(pc));
        }
        let raw = mem.fetch(pc)?;
        let instruction = decode(raw).map_err(|source| SimError::Decode { pc, raw, source })?;

        let effect = self.execute(&instruction, mem)?;

        let register_write = match (instruction.written_register(), effect.rd_value) {
            (Some(index), Some(new)) => {
                let old = self.regs.read(index)?;
                self.regs.write(index, new)?;
                Some(RegisterWrite { index, old, new })
            }
            _ => None,
        };
        self.pc = effect.next_pc;

        Ok(StepRecord {
            pc_before: pc,
            pc_after: effect.next_pc,
            instruction,
            register_write,
            memory_write: effect.memory_write,
            branch_taken: effect.redirected,
        })
    }

    /// Computes what `inst` does without touching registers or `pc`.
    ///
    /// Stores are performed here, last, so nothing after them can fail.
    fn execute(&self, inst: &Instruction, mem: &mut Memory) -> Result<Effect, SimError> {
        let pc = self.pc;
        let params = inst.params;
        let rs1 = self.regs.read(params.rs1.unwrap_or(0))?;
        let rs2 = self.regs.read(params.rs2.unwrap_or(0))?;
        let imm = params.imm.unwrap_or(0);
        let fallthrough = pc.wrapping_add(INSTRUCTION_SIZE);

        let mut effect = Effect {
            rd_value: None,
            memory_write: None,
            next_pc: fallthrough,
            redirected: false,
        };

        if let Some(op) = AluOp::from_op(inst.op) {
            let b = if inst.itype == InstructionType::R { rs2 } else { imm };
            effect.rd_value = Some(Alu::execute(op, rs1 as u32, b as u32) as i32);
        } else if let Some(cond) = BranchCond::from_op(inst.op) {
            if Bru::taken(cond, rs1, rs2) {
                effect.next_pc = Bru::relative_target(pc, imm);
                effect.redirected = true;
            }
        } else if let Some(kind) = Lsu::load_kind(inst.op) {
            let address = Lsu::effective_address(rs1, imm);
            effect.rd_value = Some(Lsu::load(mem, address, kind)?);
        } else if let Some(width) = Lsu::store_width(inst.op) {
            let address = Lsu::effective_address(rs1, imm);
            let old = Lsu::store(mem, address, width, rs2)?;
            effect.memory_write = Some(MemoryWrite {
                address: address as u32,
                width,
                old,
                new: rs2 as u32 & width.mask(),
            });
        } else {
            match inst.op {
                Op::Lui => effect.rd_value = Some(imm),
                Op::Auipc => effect.rd_value = Some(pc.wrapping_add(imm as u32) as i32),
                Op::Jal => {
                    effect.rd_value = Some(fallthrough as i32);
                    effect.next_pc = Bru::relative_target(pc, imm);
                    effect.redirected = true;
                }
                Op::Jalr => {
                    effect.rd_value = Some(fallthrough as i32);
                    effect.next_pc = Bru::jalr_target(rs1, imm);
                    effect.redirected = true;
                }
                // FENCE orders nothing on a single in-order hart; ECALL and
                // EBREAK only signal the driver through the record.
                _ => {}
            }
        }

        Ok(effect)
    }
}
