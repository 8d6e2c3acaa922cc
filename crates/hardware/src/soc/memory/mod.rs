//! Flat Main Memory.
//!
//! This module implements the main memory behind both caches. It provides:
//! 1. **Storage:** A zero-initialized `Vec<u8>` addressed from 0.
//! 2. **Access:** Bounds-checked, big-endian `MemoryStore` reads and writes.
//! 3. **Observability:** A dump of every non-zero word for end-of-run reports.

use std::io::{self, Write};

use crate::common::data::MemEntrySize;
use crate::common::error::MemoryError;
use crate::soc::traits::MemoryStore;

/// Flat, byte-addressable memory starting at address 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainMemory {
    bytes: Vec<u8>,
}

impl MainMemory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the capacity in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory has no bytes at all.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the slice does not fit.
    pub fn load(&mut self, offset: u32, data: &[u8]) -> Result<(), MemoryError> {
        let start = offset as usize;
        let end = start
            .checked_add(data.len())
            .filter(|&end| end <= self.bytes.len())
            .ok_or(MemoryError::OutOfBounds {
                addr: offset,
                size: data.len() as u32,
            })?;
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes every non-zero aligned word as `address: value`, one per line.
    ///
    /// # Errors
    ///
    /// Propagates failures from `out`.
    pub fn dump(&self, out: &mut impl Write) -> io::Result<()> {
        for (i, chunk) in self.bytes.chunks_exact(4).enumerate() {
            let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            if word != 0 {
                writeln!(out, "{:#010x}: {:#010x}", i * 4, word)?;
            }
        }
        Ok(())
    }

    fn range(&self, addr: u32, size: MemEntrySize) -> Result<std::ops::Range<usize>, MemoryError> {
        let start = addr as usize;
        let end = start + size.bytes() as usize;
        if end > self.bytes.len() {
            return Err(MemoryError::OutOfBounds {
                addr,
                size: size.bytes(),
            });
        }
        Ok(start..end)
    }
}

impl MemoryStore for MainMemory {
    fn get_value(&self, addr: u32, size: MemEntrySize) -> Result<u32, MemoryError> {
        let range = self.range(addr, size)?;
        Ok(self.bytes[range]
            .iter()
            .fold(0, |acc, &b| (acc << 8) | u32::from(b)))
    }

    fn set_value(&mut self, addr: u32, value: u32, size: MemEntrySize) -> Result<(), MemoryError> {
        let range = self.range(addr, size)?;
        let be = value.to_be_bytes();
        let width = size.bytes() as usize;
        self.bytes[range].copy_from_slice(&be[4 - width..]);
        Ok(())
    }
}
