//! MIPS SPECIAL Function Codes.
//!
//! The function field (bits 5-0) distinguishes R-type instructions sharing
//! primary opcode 0.

/// Shift Left Logical.
pub const SLL: u32 = 0x00;
/// Shift Right Logical.
pub const SRL: u32 = 0x02;
/// Jump Register.
pub const JR: u32 = 0x08;
/// Add (traps on overflow).
pub const ADD: u32 = 0x20;
/// Add Unsigned (wraps).
pub const ADDU: u32 = 0x21;
/// Subtract (traps on overflow).
pub const SUB: u32 = 0x22;
/// Subtract Unsigned (wraps).
pub const SUBU: u32 = 0x23;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Bitwise NOR.
pub const NOR: u32 = 0x27;
/// Set on Less Than.
pub const SLT: u32 = 0x2a;
/// Set on Less Than Unsigned.
pub const SLTU: u32 = 0x2b;
