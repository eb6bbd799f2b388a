//! Value-typed views of simulator state.

use serde::Serialize;

use crate::common::constants::NUM_REGS;
use crate::isa::instruction::Instruction;

/// An immutable copy of the architectural state between two steps.
///
/// A snapshot owns its data and never borrows from the simulator, so it can be
/// sent to another thread or serialized for a renderer. Memory is not copied;
/// read it through [`Memory::read_range`](crate::soc::memory::Memory::read_range)
/// or [`Memory::local_read`](crate::soc::memory::Memory::local_read).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Program counter of the next instruction to fetch.
    pub pc: u32,
    /// Address of the most recently retired instruction.
    pub pc_last: Option<u32>,
    /// All integer registers, `x0` included.
    pub registers: [i32; NUM_REGS],
    /// The most recently retired instruction.
    pub last_instruction: Option<Instruction>,
    /// Instructions retired since the last reset.
    pub retired: u64,
}

impl Snapshot {
    /// Value of register `idx`, or `None` if the index is out of range.
    pub fn register(&self, idx: usize) -> Option<i32> {
        self.registers.get(idx).copied()
    }

    /// Registers whose values differ between `self` and a later snapshot.
    pub fn changed_registers(&self, later: &Self) -> Vec<usize> {
        (0..NUM_REGS)
            .filter(|&i| self.registers[i] != later.registers[i])
            .collect()
    }
}
