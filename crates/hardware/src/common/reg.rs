//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 MIPS general-purpose
//! registers. It provides:
//! 1. **Storage:** 32 × 32-bit integer registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Register `$zero` is hardwired to zero.
//! 3. **Observability:** A serializable snapshot with ABI names for final reports.

use std::fmt;

use serde::Serialize;

use super::constants::NUM_REGS;
use crate::isa::abi::REG_NAMES;

/// General-purpose register file.
///
/// Register `$zero` always reads as zero; writes to it are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$zero` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` are ignored.
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Takes a snapshot of all registers for reporting.
    pub fn dump(&self) -> RegisterDump {
        RegisterDump { regs: self.regs }
    }
}

/// Final register contents handed to a reporter.
///
/// Displays as 16 lines of two registers each, labelled with their ABI names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterDump {
    /// Register values indexed by register number.
    pub regs: [u32; NUM_REGS],
}

impl RegisterDump {
    /// Returns the value of register `idx`.
    pub fn get(&self, idx: usize) -> u32 {
        self.regs[idx]
    }
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "${:<2} {:<4} = {:#010x}   ${:<2} {:<4} = {:#010x}",
                i,
                REG_NAMES[i],
                self.regs[i],
                i + 1,
                REG_NAMES[i + 1],
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
