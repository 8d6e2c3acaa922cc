//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction. The trapping forms (ADD, SUB,
//! ADDI) report signed overflow; the unsigned forms wrap.

/// Adds two words, returning `None` on signed overflow.
///
/// Overflow occurs exactly when both operands share a sign and the result's
/// sign differs from it.
#[inline]
pub const fn add_checked(a: u32, b: u32) -> Option<u32> {
    match (a as i32).checked_add(b as i32) {
        Some(v) => Some(v as u32),
        None => None,
    }
}

/// Subtracts `b` from `a`, returning `None` on signed overflow.
#[inline]
pub const fn sub_checked(a: u32, b: u32) -> Option<u32> {
    match (a as i32).checked_sub(b as i32) {
        Some(v) => Some(v as u32),
        None => None,
    }
}

/// Adds two words with wrap-around.
#[inline]
pub const fn add_wrapping(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Subtracts `b` from `a` with wrap-around.
#[inline]
pub const fn sub_wrapping(a: u32, b: u32) -> u32 {
    a.wrapping_sub(b)
}
