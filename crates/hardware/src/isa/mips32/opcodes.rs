//! MIPS Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) recognized by the decoder.

/// SPECIAL: R-type instructions, selected by the function code.
pub const OP_SPECIAL: u32 = 0x00;

/// Jump.
pub const OP_J: u32 = 0x02;
/// Jump And Link.
pub const OP_JAL: u32 = 0x03;

/// Branch on Equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch on Not Equal.
pub const OP_BNE: u32 = 0x05;
/// Branch on Less Than or Equal to Zero.
pub const OP_BLEZ: u32 = 0x06;
/// Branch on Greater Than Zero.
pub const OP_BGTZ: u32 = 0x07;

/// Add Immediate (traps on overflow).
pub const OP_ADDI: u32 = 0x08;
/// Add Immediate Unsigned (wraps).
pub const OP_ADDIU: u32 = 0x09;
/// Set on Less Than Immediate.
pub const OP_SLTI: u32 = 0x0a;
/// Set on Less Than Immediate Unsigned.
pub const OP_SLTIU: u32 = 0x0b;
/// AND Immediate.
pub const OP_ANDI: u32 = 0x0c;
/// OR Immediate.
pub const OP_ORI: u32 = 0x0d;
/// Load Upper Immediate.
pub const OP_LUI: u32 = 0x0f;

/// Load Word.
pub const OP_LW: u32 = 0x23;
/// Load Byte Unsigned.
pub const OP_LBU: u32 = 0x24;
/// Load Halfword Unsigned.
pub const OP_LHU: u32 = 0x25;
/// Store Byte.
pub const OP_SB: u32 = 0x28;
/// Store Halfword.
pub const OP_SH: u32 = 0x29;
/// Store Word.
pub const OP_SW: u32 = 0x2b;
/// Load Linked.
pub const OP_LL: u32 = 0x30;
/// Store Conditional.
pub const OP_SC: u32 = 0x38;
