//! Pipeline Latch Interface.
//!
//! This module defines the common trait for the inter-stage latches. It provides:
//! 1. **Identification:** The raw word held, used for pipe-state snapshots.
//! 2. **Forwarding Source:** The pending register write, if any, that later
//!    stages may bypass instead of waiting for write-back.

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Returns the raw instruction word held by the latch (0 for a bubble).
    fn inst(&self) -> u32;

    /// Returns `(register, value)` if the held instruction has a computed
    /// result destined for a non-zero register.
    fn pending_write(&self) -> Option<(usize, u32)>;

    /// Checks if the latch holds a bubble.
    fn is_bubble(&self) -> bool {
        self.inst() == 0
    }

    /// Returns the value this latch can forward for `reg`, if any.
    ///
    /// Register 0 and entries without a computed result never forward.
    fn forwards(&self, reg: usize) -> Option<u32> {
        self.pending_write()
            .and_then(|(rd, val)| (rd == reg).then_some(val))
    }
}
