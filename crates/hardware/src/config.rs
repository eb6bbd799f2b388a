//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants for memory size and reset state.
//! 2. **Structures:** `GeneralConfig` (tracing, reset pc/sp) and `MemoryConfig` (size).
//! 3. **Parsing:** JSON deserialization with per-field defaults.
//!
//! Configuration is supplied as JSON by an embedding driver, or use `Config::default()`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::constants::{INSTRUCTION_SIZE, MAX_MEMORY_SIZE};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_MEMORY_SIZE;

    /// Program counter after reset.
    pub const START_PC: u32 = 0;

    /// Size of simulated memory in bytes.
    pub const MEMORY_SIZE: usize = DEFAULT_MEMORY_SIZE;
}

/// Errors raised while building a configuration or a memory from one.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Memory must be non-empty, a multiple of 4 bytes and at most 4 GiB.
    #[error("invalid memory size {0} (must be a non-zero multiple of 4, at most 4 GiB)")]
    InvalidMemorySize(usize),

    /// The JSON text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rv32sim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "start_pc": 256 },
///     "memory": { "size": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x100);
/// assert_eq!(config.general.initial_sp, None);
/// assert_eq!(config.memory.size, 4096);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a JSON configuration and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidMemorySize`] for an unusable memory size.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMemorySize`] for an unusable memory size.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        check_memory_size(self.memory.size)
    }
}

/// Accepts memory sizes that are non-zero, word-multiple and addressable in 32 bits.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidMemorySize`] otherwise.
pub const fn check_memory_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 || !size.is_multiple_of(INSTRUCTION_SIZE as usize) || size > MAX_MEMORY_SIZE {
        return Err(ConfigError::InvalidMemorySize(size));
    }
    Ok(())
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event for every retired instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Program counter after reset.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Stack pointer after reset. Defaults to the memory size (top of memory).
    #[serde(default)]
    pub initial_sp: Option<u32>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            initial_sp: None,
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Memory size in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default memory size.
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}
