//! ALU shift operations.
//!
//! MIPS encodes the shift amount in the 5-bit `shamt` field, so amounts are
//! masked to 0-31.

/// Shift left logical.
#[inline]
pub const fn sll(value: u32, shamt: u32) -> u32 {
    value << (shamt & 0x1f)
}

/// Shift right logical.
#[inline]
pub const fn srl(value: u32, shamt: u32) -> u32 {
    value >> (shamt & 0x1f)
}
