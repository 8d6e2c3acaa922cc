//! Backing store trait.
//!
//! This module defines the `MemoryStore` trait implemented by whatever sits behind
//! the caches. It provides:
//! 1. **Access:** Big-endian byte, half-word and word reads and writes.
//! 2. **Failure Reporting:** Out-of-range accesses return a [`MemoryError`] instead of
//!    panicking so the simulator can surface them to the caller.
//!
//! The caches never hold a reference to the store; it is passed into every access.

use crate::common::data::MemEntrySize;
use crate::common::error::MemoryError;

/// Byte-addressable backing store.
pub trait MemoryStore {
    /// Reads a value of the given width at `addr`.
    ///
    /// Multi-byte values are assembled big-endian. The result is zero-extended.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if any byte of the access is outside the store.
    fn get_value(&self, addr: u32, size: MemEntrySize) -> Result<u32, MemoryError>;

    /// Writes the low bytes of `value` at `addr` with the given width, big-endian.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if any byte of the access is outside the store.
    fn set_value(&mut self, addr: u32, value: u32, size: MemEntrySize) -> Result<(), MemoryError>;
}
