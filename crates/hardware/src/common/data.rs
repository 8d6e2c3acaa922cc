//! Memory Access Widths.
//!
//! Loads and stores move one, two or four bytes. The same width type is used by
//! the memory store, both caches and the memory stage so that a half-word store
//! means the same thing at every level of the hierarchy.

use serde::Serialize;

/// Width of a single memory transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MemEntrySize {
    /// One byte (LBU, SB).
    Byte,
    /// Two bytes, big-endian (LHU, SH).
    Half,
    /// Four bytes, big-endian (LW, SW, LL, SC, instruction fetch).
    Word,
}

impl MemEntrySize {
    /// Returns the number of bytes moved by an access of this width.
    #[inline]
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Truncates `value` to the low bytes covered by this width.
    #[inline]
    pub const fn mask(self, value: u32) -> u32 {
        match self {
            Self::Byte => value & 0xff,
            Self::Half => value & 0xffff,
            Self::Word => value,
        }
    }
}
