//! Program Loading.
//!
//! This module places programs into simulated memory before simulation starts. It performs:
//! 1. **Raw images:** Copies a flat binary to a fixed address.
//! 2. **ELF images:** Copies every `PT_LOAD` segment of a 32-bit little-endian RISC-V ELF
//!    to its virtual address and zero-fills the uninitialized tail (`.bss`).
//! 3. **Files:** Reads an ELF from disk and loads it.

use std::path::{Path, PathBuf};
use std::{fs, io};

use object::{Architecture, Object, ObjectSegment};
use thiserror::Error;

use crate::common::SimError;
use crate::soc::memory::Memory;

/// Errors raised while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The bytes are not a well-formed object file.
    #[error("malformed ELF image: {0}")]
    Parse(#[from] object::Error),

    /// The image targets something other than 32-bit little-endian RISC-V.
    #[error("unsupported image architecture {0:?}, expected little-endian Riscv32")]
    Architecture(Architecture),

    /// A segment or the entry point lies beyond the 32-bit address space.
    #[error("address {0:#x} does not fit in 32 bits")]
    AddressRange(u64),

    /// A segment does not fit in simulated memory.
    #[error(transparent)]
    Placement(#[from] SimError),
}

/// Copies a raw binary image into memory at `at`.
///
/// # Errors
///
/// Returns [`SimError::OutOfBounds`] if the image does not fit; memory is left
/// untouched in that case.
pub fn load_binary(mem: &mut Memory, bytes: &[u8], at: u32) -> Result<(), SimError> {
    mem.load_program(bytes, at)?;
    tracing::debug!(at = format_args!("{at:#010x}"), len = bytes.len(), "loaded raw image");
    Ok(())
}

/// Loads a 32-bit RISC-V ELF image and returns its entry point.
///
/// Segments are validated before any byte is copied, so a rejected image
/// leaves memory unchanged.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed input, [`LoadError::Architecture`]
/// for non-RV32 images, and [`LoadError::AddressRange`] or
/// [`LoadError::Placement`] when a segment cannot be placed.
pub fn load_elf(mem: &mut Memory, bytes: &[u8]) -> Result<u32, LoadError> {
    let file = object::File::parse(bytes)?;
    if file.architecture() != Architecture::Riscv32 || !file.is_little_endian() {
        return Err(LoadError::Architecture(file.architecture()));
    }
    let entry = to_u32(file.entry())?;

    let mut segments = Vec::new();
    for segment in file.segments() {
        let address = to_u32(segment.address())?;
        let data = segment.data()?;
        let mem_size = usize::try_from(segment.size())
            .map_err(|_| LoadError::AddressRange(segment.size()))?;
        // Probe the whole in-memory extent before copying anything.
        let _ = mem.read_range(i64::from(address), mem_size.max(data.len()))?;
        segments.push((address, data, mem_size));
    }

    for (address, data, mem_size) in segments {
        mem.load_program(data, address)?;
        if mem_size > data.len() {
            let bss_start = address.wrapping_add(data.len() as u32);
            mem.zero_fill(bss_start, mem_size - data.len())?;
        }
        tracing::debug!(
            address = format_args!("{address:#010x}"),
            file_size = data.len(),
            mem_size,
            "loaded segment"
        );
    }

    tracing::debug!(entry = format_args!("{entry:#010x}"), "loaded ELF image");
    Ok(entry)
}

/// Reads an ELF image from `path` and loads it.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`load_elf`].
pub fn load_elf_file(mem: &mut Memory, path: impl AsRef<Path>) -> Result<u32, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_elf(mem, &bytes)
}

fn to_u32(value: u64) -> Result<u32, LoadError> {
    u32::try_from(value).map_err(|_| LoadError::AddressRange(value))
}
