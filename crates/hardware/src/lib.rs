//! Educational RV32IM instruction-set simulator library.
//!
//! This crate models a single RISC-V hart executing one instruction per step:
//! 1. **ISA:** Decoding, encoding and disassembly for RV32I and the M extension.
//! 2. **Core:** The register file, program counter and a fetch/decode/execute step.
//! 3. **Memory:** A flat, bounds-checked, little-endian byte array.
//! 4. **Simulation:** Per-step diff records, snapshots, observers, loaders and statistics.
//!
//! # Examples
//!
//! ```
//! use rv32sim_core::isa::encode;
//! use rv32sim_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(&Config::default()).unwrap();
//! let program: Vec<u8> = [encode::addi(5, 0, 10), encode::addi(5, 5, 5)]
//!     .iter()
//!     .flat_map(|w| w.to_le_bytes())
//!     .collect();
//! sim.load_program(&program, 0).unwrap();
//!
//! let _ = sim.step().unwrap();
//! let _ = sim.step().unwrap();
//! assert_eq!(sim.register(5).unwrap(), 15);
//! assert_eq!(sim.cpu.pc, 8);
//! ```

/// Common types and constants (errors, access widths, register file).
pub mod common;
/// Simulator configuration (defaults and JSON parsing).
pub mod config;
/// CPU core (architectural state, step, functional units).
pub mod core;
/// Instruction set (decode, encode, disassembly, ABI names, RV32I/M tables).
pub mod isa;
/// Simulator, step records, snapshots, observers and loading.
pub mod sim;
/// System-on-chip components (memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers and the program counter.
pub use crate::core::Cpu;
/// Flat simulated memory.
pub use crate::soc::memory::Memory;
/// Top-level simulator; owns a `Cpu` and a `Memory`.
pub use crate::sim::Simulator;
