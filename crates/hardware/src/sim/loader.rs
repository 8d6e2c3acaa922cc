//! Program Image Loading.
//!
//! This module places programs in memory before the first cycle. It performs:
//! 1. **Word loading:** Writes a slice of instruction words from address 0.
//! 2. **Image loading:** Copies a raw big-endian image from address 0.
//! 3. **File reading:** Reads an image from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::data::MemEntrySize;
use crate::common::error::{SimError, SimResult};
use crate::soc::memory::MainMemory;
use crate::soc::traits::MemoryStore;

/// Writes `words` to consecutive word addresses starting at 0.
///
/// # Errors
///
/// Returns [`SimError::Memory`] if the words run past the end of the store.
pub fn load_words<M: MemoryStore + ?Sized>(mem: &mut M, words: &[u32]) -> SimResult<()> {
    let mut addr = 0u32;
    for &word in words {
        mem.set_value(addr, word, MemEntrySize::Word)
            .map_err(|source| SimError::Memory { cycle: 0, source })?;
        addr = addr.wrapping_add(INSTRUCTION_SIZE);
    }
    debug!(words = words.len(), "program loaded");
    Ok(())
}

/// Copies a raw big-endian image into memory starting at address 0.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the image exceeds the memory size.
pub fn load_image(mem: &mut MainMemory, image: &[u8]) -> SimResult<()> {
    if image.len() > mem.len() {
        return Err(SimError::ImageTooLarge {
            len: image.len(),
            capacity: mem.len(),
        });
    }
    mem.load(0, image)
        .map_err(|source| SimError::Memory { cycle: 0, source })?;
    debug!(bytes = image.len(), "image loaded");
    Ok(())
}

/// Reads a program image from disk.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_file(path: impl AsRef<Path>) -> SimResult<Vec<u8>> {
    Ok(fs::read(path)?)
}
