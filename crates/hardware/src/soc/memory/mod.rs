//! Flat Physical Memory.
//!
//! This module implements the single memory of the simulated system. It provides:
//! 1. **Storage:** A fixed-size, zero-initialized byte array addressed from 0.
//! 2. **Access:** Little-endian byte/half/word reads (sign- or zero-extended) and writes.
//! 3. **Bounds Checking:** Every access is checked against `[0, size)` before it touches data.
//! 4. **Observation:** Raw range reads for memory and stack views.
//!
//! Unaligned data accesses are allowed. The stack occupies the high end of the
//! address space and grows downward, so the stack depth is `size - sp`.

use std::ops::Range;

use crate::common::{AccessType, AccessWidth, SimError};
use crate::config::{ConfigError, check_memory_size};

/// Byte-addressable memory of a fixed size.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMemorySize`] if `size` is zero, not a
    /// multiple of 4, or larger than the 32-bit address space.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        check_memory_size(size)?;
        Ok(Self {
            data: vec![0; size],
        })
    }

    /// Returns the size of the memory in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the full contents of memory.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Resolves `[address, address + len)` to an index range, or reports the
    /// access as out of bounds.
    fn span(&self, address: i64, len: usize, access: AccessType) -> Result<Range<usize>, SimError> {
        let size = self.data.len();
        let out_of_bounds = || SimError::OutOfBounds {
            access,
            address,
            width: len,
            size,
        };
        let start = usize::try_from(address).map_err(|_| out_of_bounds())?;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= size)
            .ok_or_else(out_of_bounds)?;
        Ok(start..end)
    }

    /// Assembles `width` bytes at `address` little-endian, zero-extended.
    fn read_raw(
        &self,
        address: i64,
        width: AccessWidth,
        access: AccessType,
    ) -> Result<u32, SimError> {
        let range = self.span(address, width.bytes(), access)?;
        let mut buf = [0u8; 4];
        buf[..width.bytes()].copy_from_slice(&self.data[range]);
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads `width` bytes at `address` as a sign-extended integer.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if `address < 0` or
    /// `address + width > size`.
    pub fn local_read(&self, address: i64, width: AccessWidth) -> Result<i32, SimError> {
        let raw = self.read_raw(address, width, AccessType::Read)?;
        let shift = 32 - width.bits();
        Ok(((raw << shift) as i32) >> shift)
    }

    /// Reads `width` bytes at `address` as a zero-extended integer.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] under the same conditions as
    /// [`local_read`](Self::local_read).
    pub fn local_read_unsigned(&self, address: i64, width: AccessWidth) -> Result<u32, SimError> {
        self.read_raw(address, width, AccessType::Read)
    }

    /// Writes the low `width` bytes of `value` little-endian at `address`.
    ///
    /// Values are truncated, never range-checked. Nothing is written when the
    /// access is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if any byte of the access falls outside memory.
    pub fn local_write(
        &mut self,
        address: i64,
        width: AccessWidth,
        value: i32,
    ) -> Result<(), SimError> {
        let range = self.span(address, width.bytes(), AccessType::Write)?;
        let bytes = value.to_le_bytes();
        self.data[range].copy_from_slice(&bytes[..width.bytes()]);
        Ok(())
    }

    /// Writes like [`local_write`](Self::local_write) and returns the
    /// zero-extended value the bytes held before.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if any byte of the access falls outside memory.
    pub fn exchange(
        &mut self,
        address: i64,
        width: AccessWidth,
        value: i32,
    ) -> Result<u32, SimError> {
        let range = self.span(address, width.bytes(), AccessType::Write)?;
        let mut old = [0u8; 4];
        old[..width.bytes()].copy_from_slice(&self.data[range.clone()]);
        self.data[range].copy_from_slice(&value.to_le_bytes()[..width.bytes()]);
        Ok(u32::from_le_bytes(old))
    }

    /// Fetches the instruction word at `pc`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] tagged [`AccessType::Fetch`] if the
    /// word does not lie entirely inside memory.
    pub fn fetch(&self, pc: u32) -> Result<u32, SimError> {
        self.read_raw(i64::from(pc), AccessWidth::Word, AccessType::Fetch)
    }

    /// Returns `len` raw bytes starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if the range leaves memory.
    pub fn read_range(&self, address: i64, len: usize) -> Result<&[u8], SimError> {
        let range = self.span(address, len, AccessType::Read)?;
        Ok(&self.data[range])
    }

    /// Copies raw program or data bytes into memory at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if the image does not fit; memory is
    /// left untouched in that case.
    pub fn load_program(&mut self, bytes: &[u8], at: u32) -> Result<(), SimError> {
        let range = self.span(i64::from(at), bytes.len(), AccessType::Write)?;
        self.data[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Zero-fills `len` bytes starting at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if the range leaves memory.
    pub fn zero_fill(&mut self, at: u32, len: usize) -> Result<(), SimError> {
        let range = self.span(i64::from(at), len, AccessType::Write)?;
        self.data[range].fill(0);
        Ok(())
    }

    /// Zeroes all of memory.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}
