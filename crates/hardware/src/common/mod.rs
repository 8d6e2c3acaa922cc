//! Common utilities and types used throughout the MIPS pipeline simulator.
//!
//! This module provides the building blocks shared by every component of the
//! simulator. It includes:
//! 1. **Constants:** Architectural constants (halt sentinel, exception vector, word size).
//! 2. **Memory Access:** Access width definitions for byte, half-word and word transfers.
//! 3. **Error Handling:** In-model traps and fatal host errors.
//! 4. **Register Management:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access width definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{EXCEPTION_VECTOR, HALT_WORD, INSTRUCTION_SIZE};
pub use data::MemEntrySize;
pub use error::{MemoryError, SimError, SimResult, Trap};
pub use reg::RegisterFile;
