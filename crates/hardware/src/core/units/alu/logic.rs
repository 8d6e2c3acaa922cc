//! ALU logical and comparison operations.

/// Bitwise AND.
#[inline]
pub const fn and(a: u32, b: u32) -> u32 {
    a & b
}

/// Bitwise OR.
#[inline]
pub const fn or(a: u32, b: u32) -> u32 {
    a | b
}

/// Bitwise NOR.
#[inline]
pub const fn nor(a: u32, b: u32) -> u32 {
    !(a | b)
}

/// Set on less than, comparing as signed integers.
#[inline]
pub const fn slt(a: u32, b: u32) -> u32 {
    ((a as i32) < (b as i32)) as u32
}

/// Set on less than, comparing as unsigned integers.
#[inline]
pub const fn sltu(a: u32, b: u32) -> u32 {
    (a < b) as u32
}
