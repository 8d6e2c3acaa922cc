//! Memory system below the caches.
//!
//! This module organizes the components the cache hierarchy talks to: the
//! `MemoryStore` trait and the flat `MainMemory` that implements it.

/// Flat, byte-addressable main memory.
pub mod memory;

/// Backing store trait used by the caches and the loader.
pub mod traits;

pub use memory::MainMemory;
pub use traits::MemoryStore;
