//! Global System Constants.
//!
//! This module defines architectural constants used across the simulator. It includes:
//! 1. **Control Flow:** The halt sentinel and the exception vector.
//! 2. **Instruction Constants:** Instruction width and the jump region mask.
//! 3. **Register Constants:** Register count and the link register index.

/// Instruction word that stops the machine once it reaches write-back.
pub const HALT_WORD: u32 = 0xfeed_feed;

/// Address execution resumes at after an illegal instruction or overflow.
pub const EXCEPTION_VECTOR: u32 = 0x8000;

/// Size of an instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Upper address bits kept from `pc + 4` when forming a J/JAL target.
pub const JUMP_REGION_MASK: u32 = 0xf000_0000;

/// Number of architectural general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Register written by JAL with the return address.
pub const LINK_REG: usize = 31;

/// Default size of the flat memory store (64 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 0x1_0000;
