//! Execution units and functional components.
//!
//! This module contains the integer ALU used by the execute stage and the
//! set-associative cache model shared by instruction fetch and the memory stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Write-back, write-allocate cache with true LRU replacement.
pub mod cache;
