//! Trap and Error definitions.
//!
//! This module defines the two kinds of failure the simulator distinguishes. It provides:
//! 1. **Trap Representation:** In-model exceptions that redirect the simulated program
//!    to the exception vector and never abort the simulation.
//! 2. **Host Errors:** Fatal conditions (bad configuration, out-of-range memory access,
//!    I/O) propagated to the caller with `?`.
//! 3. **Error Handling:** Integration with the standard Rust error traits.

use std::fmt;

use thiserror::Error;

/// MIPS exceptions raised by the simulated program.
///
/// A trap squashes the offending instruction and the younger instructions behind it,
/// then resumes execution at the exception vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trap {
    /// Illegal instruction exception.
    ///
    /// Raised in decode when the opcode or function code is not recognized.
    /// The associated value is the instruction encoding.
    IllegalInstruction(u32),

    /// Arithmetic overflow exception.
    ///
    /// Raised in execute when ADD, SUB or ADDI overflows as a signed 32-bit
    /// operation. The associated value is the instruction encoding.
    ArithmeticOverflow(u32),
}

impl Trap {
    /// Returns the instruction word that raised the trap.
    pub const fn inst(self) -> u32 {
        match self {
            Self::IllegalInstruction(inst) | Self::ArithmeticOverflow(inst) => inst,
        }
    }
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalInstruction(inst) => write!(f, "IllegalInstruction({inst:#010x})"),
            Self::ArithmeticOverflow(inst) => write!(f, "ArithmeticOverflow({inst:#010x})"),
        }
    }
}

impl std::error::Error for Trap {}

/// Failures reported by a [`MemoryStore`](crate::soc::traits::MemoryStore).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// The access touches bytes past the end of the store.
    #[error("memory access out of bounds: addr={addr:#010x}, {size} byte(s)")]
    OutOfBounds {
        /// First byte of the access.
        addr: u32,
        /// Width of the access in bytes.
        size: u32,
    },
}

/// Fatal simulator errors.
#[derive(Debug, Error)]
pub enum SimError {
    /// A cache configuration cannot be turned into a valid geometry.
    #[error("invalid {cache} configuration: {reason}")]
    InvalidCacheConfig {
        /// Which cache was being built ("icache" or "dcache").
        cache: &'static str,
        /// Why the configuration was rejected.
        reason: String,
    },

    /// The memory store rejected a fill, write-back or drain.
    #[error("memory error at cycle {cycle}: {source}")]
    Memory {
        /// Cycle at which the access was issued.
        cycle: u64,
        /// Underlying store error.
        #[source]
        source: MemoryError,
    },

    /// A program image does not fit in the memory store.
    #[error("program image of {len} bytes does not fit in {capacity} bytes of memory")]
    ImageTooLarge {
        /// Image length in bytes.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// A JSON configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading an image or configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying a [`SimError`].
pub type SimResult<T> = Result<T, SimError>;
