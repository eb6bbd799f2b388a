//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the
//! architectural state of the single simulated hart:
//! 1. **State Management:** The register file and the program counter.
//! 2. **Reset Convention:** Start PC and initial stack pointer taken from the configuration.
//! 3. **Step History:** The most recent [`StepRecord`], from which `pc_last` and the
//!    last retired instruction are derived.
//!
//! Memory is not owned by the CPU; [`Cpu::step`] borrows it for the duration
//! of one instruction.

/// Instruction fetch, decode, execute and commit.
pub mod execution;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::isa::instruction::Instruction;
use crate::sim::record::StepRecord;

/// Architectural state of one RV32IM hart.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General purpose registers.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Emit a trace event for every retired instruction.
    pub trace: bool,
    start_pc: u32,
    initial_sp: u32,
    last: Option<StepRecord>,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// The stack pointer starts at `config.general.initial_sp`, or at the top
    /// of memory when unset. A 4 GiB memory truncates that top to 0.
    pub fn new(config: &Config) -> Self {
        let initial_sp = config
            .general
            .initial_sp
            .unwrap_or(config.memory.size as u32);
        let mut cpu = Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            trace: config.general.trace_instructions,
            start_pc: config.general.start_pc,
            initial_sp,
            last: None,
        };
        cpu.reset();
        cpu
    }

    /// Zeroes every register, then sets `pc` and `sp` by convention and
    /// forgets the last step.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.regs.set_sp(self.initial_sp as i32);
        self.pc = self.start_pc;
        self.last = None;
        tracing::debug!(pc = self.pc, sp = self.initial_sp, "cpu reset");
    }

    /// Makes `pc` the reset address and jumps there, as after loading an image.
    pub const fn set_entry(&mut self, pc: u32) {
        self.start_pc = pc;
        self.pc = pc;
    }

    /// The `pc` the most recent instruction was fetched from, if any has retired
    /// since the last reset.
    pub fn pc_last(&self) -> Option<u32> {
        self.last.as_ref().map(|r| r.pc_before)
    }

    /// The most recently retired instruction.
    pub fn last_instruction(&self) -> Option<&Instruction> {
        self.last.as_ref().map(|r| &r.instruction)
    }

    /// The record of the most recent successful step.
    pub const fn last_record(&self) -> Option<&StepRecord> {
        self.last.as_ref()
    }
}
