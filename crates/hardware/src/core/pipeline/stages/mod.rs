//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Every stage reads the latches as they stood at the start
//! of the cycle and returns its proposed next latch value; the engine decides what
//! is committed. It includes:
//! 1. **Fetch:** Reads the word at the PC through the instruction cache.
//! 2. **Decode:** Decodes the word, reads operands and resolves branches and jumps.
//! 3. **Execute:** Forwards operands and runs the ALU.
//! 4. **Memory:** Performs loads and stores through the data cache.
//! 5. **Writeback:** Commits results to the register file and detects halt.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::{DecodeOutput, decode_stage};
/// Execute stage entry point (EX stage).
pub use execute::{ExecuteOutput, execute_stage};
/// Fetch stage entry point (IF stage).
pub use fetch::{FetchOutput, FetchUnit, fetch_stage};
/// Memory stage entry point (MEM stage).
pub use memory::{MemoryOutput, mem_stage};
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
