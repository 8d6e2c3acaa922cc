//! Cache Replacement Policies.
//!
//! Implements the algorithm for selecting victim lines in set-associative caches.
//! The cache itself prefers an invalid way; the policy is only consulted when
//! every way of the set holds a valid line.
//!
//! # Policies
//!
//! - `Lru`: True Least Recently Used.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

/// Trait for cache replacement policies.
///
/// Defines the interface for updating usage state and selecting victim lines.
pub trait ReplacementPolicy: Send + Sync + std::fmt::Debug {
    /// Updates the policy state when a line is accessed or filled.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way index within the set that was accessed.
    fn update(&mut self, set: usize, way: usize);

    /// Selects a victim line to evict from a fully valid set.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    ///
    /// # Returns
    ///
    /// The index of the way to evict.
    fn get_victim(&mut self, set: usize) -> usize;
}
