//! Per-step diff records.
//!
//! Every successful [`Cpu::step`](crate::core::Cpu::step) returns a
//! [`StepRecord`] describing exactly what the instruction changed. Records are
//! plain values: observers can keep them, compare them, or replay them without
//! touching the simulator.

use serde::Serialize;

use crate::common::AccessWidth;
use crate::isa::instruction::Instruction;

/// A register write performed by a retired instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterWrite {
    /// Destination register index (never 0).
    pub index: usize,
    /// Value before the write.
    pub old: i32,
    /// Value after the write.
    pub new: i32,
}

/// A memory write performed by a retired store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryWrite {
    /// Address of the first byte written.
    pub address: u32,
    /// Number of bytes written.
    pub width: AccessWidth,
    /// Previous contents, zero-extended.
    pub old: u32,
    /// New contents, zero-extended (the stored value truncated to `width`).
    pub new: u32,
}

/// Everything one `step()` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Address the instruction was fetched from.
    pub pc_before: u32,
    /// Program counter after the instruction retired.
    pub pc_after: u32,
    /// The retired instruction.
    pub instruction: Instruction,
    /// Register write, if the instruction changed a register other than `x0`.
    pub register_write: Option<RegisterWrite>,
    /// Memory write, if the instruction was a store.
    pub memory_write: Option<MemoryWrite>,
    /// Whether control was redirected: a taken branch or any jump.
    pub branch_taken: bool,
}

impl StepRecord {
    /// Whether the retired instruction was ECALL or EBREAK.
    pub const fn halted(&self) -> bool {
        self.instruction.is_halt()
    }

    /// Registers the instruction read or wrote, for highlighting.
    ///
    /// The destination comes first, followed by the sources; duplicates and
    /// `x0` are omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::isa::encode;
    /// use rv32sim_core::{Config, Simulator};
    ///
    /// let mut sim = Simulator::new(&Config::default()).unwrap();
    /// sim.load_program(&encode::add(5, 5, 6).to_le_bytes(), 0).unwrap();
    /// let record = sim.step().unwrap();
    /// assert_eq!(record.registers_touched(), vec![5, 6]);
    /// ```
    pub fn registers_touched(&self) -> Vec<usize> {
        let params = &self.instruction.params;
        let mut touched = Vec::with_capacity(3);
        for idx in params.rd.into_iter().chain(params.sources()) {
            if idx != 0 && !touched.contains(&idx) {
                touched.push(idx);
            }
        }
        touched
    }
}
