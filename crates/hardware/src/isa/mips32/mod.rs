//! MIPS-I Integer Subset.
//!
//! Defines the encodings of the integer instructions the pipeline executes.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26) for I-type and J-type instructions.
//! - `funct`: Function codes (bits 5-0) selecting R-type operations under opcode 0.

/// Function codes for R-type (SPECIAL) instructions.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;
