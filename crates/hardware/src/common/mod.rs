//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Register count, instruction width and memory defaults.
//! 2. **Memory Access:** Access kinds (Fetch/Read/Write) and widths (byte/half/word).
//! 3. **Error Handling:** Decode, bounds and register-index errors.
//! 4. **Register Management:** The general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::{AccessType, AccessWidth};
pub use error::{DecodeError, SimError};
pub use reg::RegisterFile;
