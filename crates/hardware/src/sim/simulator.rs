//! Simulator: owns both the CPU and the memory side-by-side.
//!
//! Keeping memory outside the CPU lets [`Cpu::step`] borrow it mutably for one
//! instruction while the simulator keeps ownership of both, so no component
//! ever holds a live reference into another.

use std::fmt;
use std::path::Path;

use super::loader::{self, LoadError};
use super::observer::StepObserver;
use super::record::StepRecord;
use super::snapshot::Snapshot;
use crate::common::SimError;
use crate::config::{Config, ConfigError};
use crate::core::Cpu;
use crate::isa::abi;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunExit {
    /// An ECALL or EBREAK retired.
    Halted {
        /// Address of the halting instruction.
        pc: u32,
        /// Steps executed in this call, the halting one included.
        steps: u64,
    },
    /// The step budget ran out first.
    StepLimit {
        /// Steps executed in this call.
        steps: u64,
    },
}

/// Top-level simulator: CPU architectural state, memory and statistics.
pub struct Simulator {
    /// CPU architectural state (registers, pc, last step).
    pub cpu: Cpu,
    /// Simulated memory.
    pub memory: Memory,
    /// Statistics since the last reset.
    pub stats: SimStats,
    observers: Vec<Box<dyn StepObserver>>,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("memory", &self.memory)
            .field("stats", &self.stats)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Simulator {
    /// Creates a simulator with zeroed memory, in its reset state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMemorySize`] if the configured memory size
    /// is unusable.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let memory = Memory::new(config.memory.size)?;
        Ok(Self {
            cpu: Cpu::new(config),
            memory,
            stats: SimStats::default(),
            observers: Vec::new(),
        })
    }

    /// Creates a simulator from a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(&Config::from_json(json)?)
    }

    /// Executes one instruction, updates statistics and notifies observers.
    ///
    /// # Errors
    ///
    /// Propagates the [`SimError`] from [`Cpu::step`]; observers are not
    /// notified and statistics are not updated for a failed step.
    pub fn step(&mut self) -> Result<StepRecord, SimError> {
        let record = self.cpu.step(&mut self.memory)?;
        self.stats.record(&record);
        for observer in &mut self.observers {
            observer.on_step(&record);
        }
        Ok(record)
    }

    /// Steps until an ECALL/EBREAK retires or `max_steps` instructions have run.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failing step's error.
    pub fn run(&mut self, max_steps: u64) -> Result<RunExit, SimError> {
        for steps in 1..=max_steps {
            let record = self.step()?;
            if record.halted() {
                tracing::debug!(pc = record.pc_before, steps, "halted");
                return Ok(RunExit::Halted {
                    pc: record.pc_before,
                    steps,
                });
            }
        }
        Ok(RunExit::StepLimit { steps: max_steps })
    }

    /// Resets registers, `pc`, `sp` and statistics. Memory is preserved.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.stats.reset();
    }

    /// Copies raw program bytes into memory at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if the image does not fit.
    pub fn load_program(&mut self, bytes: &[u8], at: u32) -> Result<(), SimError> {
        loader::load_binary(&mut self.memory, bytes, at)
    }

    /// Loads an ELF image and makes its entry point the reset `pc`.
    ///
    /// # Errors
    ///
    /// See [`loader::load_elf`].
    pub fn load_elf(&mut self, bytes: &[u8]) -> Result<u32, LoadError> {
        let entry = loader::load_elf(&mut self.memory, bytes)?;
        self.cpu.set_entry(entry);
        Ok(entry)
    }

    /// Loads an ELF file and makes its entry point the reset `pc`.
    ///
    /// # Errors
    ///
    /// See [`loader::load_elf_file`].
    pub fn load_elf_file(&mut self, path: impl AsRef<Path>) -> Result<u32, LoadError> {
        let entry = loader::load_elf_file(&mut self.memory, path)?;
        self.cpu.set_entry(entry);
        Ok(entry)
    }

    /// Registers an observer to be notified after every successful step.
    pub fn add_observer(&mut self, observer: Box<dyn StepObserver>) {
        self.observers.push(observer);
        tracing::debug!(count = self.observers.len(), "observer registered");
    }

    /// Copies the current architectural state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.cpu.pc,
            pc_last: self.cpu.pc_last(),
            registers: self.cpu.regs.values(),
            last_instruction: self.cpu.last_instruction().copied(),
            retired: self.stats.instructions_retired,
        }
    }

    /// Current value of register `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IndexOutOfRange`] if `idx > 31`.
    pub fn register(&self, idx: usize) -> Result<i32, SimError> {
        self.cpu.regs.read(idx)
    }

    /// ABI name of register `idx` (`zero`, `ra`, `sp`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IndexOutOfRange`] if `idx > 31`.
    pub fn register_name(idx: usize) -> Result<&'static str, SimError> {
        abi::name(idx).ok_or(SimError::IndexOutOfRange(idx))
    }
}
