//! MIPS o32 ABI register names.
//!
//! Defines the conventional register names used in register dumps and the
//! disassembler, plus indices for the registers the pipeline treats specially.

/// Register $0 (hardwired zero).
pub const REG_ZERO: usize = 0;
/// Register $2 (first return value, v0).
pub const REG_V0: usize = 2;
/// Register $4 (first argument, a0).
pub const REG_A0: usize = 4;
/// Register $29 (stack pointer, sp).
pub const REG_SP: usize = 29;
/// Register $31 (return address, ra), written by JAL.
pub const REG_RA: usize = 31;

/// ABI names for $0-$31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
