/// Overflow rules of the trapping arithmetic instructions.
pub mod alu;

/// Cache hits, misses, replacement and write-back.
pub mod cache;
