//! Simulation driver surface.
//!
//! Provides the [`Simulator`] that owns the CPU and memory, the per-step
//! [`StepRecord`] diffs it produces, value-typed [`Snapshot`]s, the
//! [`StepObserver`] subscription trait and program loading.

/// Program and ELF loading.
pub mod loader;

/// Step subscription trait.
pub mod observer;

/// Per-step diff records.
pub mod record;

/// Top-level simulator.
pub mod simulator;

/// Value-typed state snapshots.
pub mod snapshot;

pub use self::observer::StepObserver;
pub use self::record::{MemoryWrite, RegisterWrite, StepRecord};
pub use self::simulator::{RunExit, Simulator};
pub use self::snapshot::Snapshot;
