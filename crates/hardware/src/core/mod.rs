//! Core processor implementation.
//!
//! This module contains the processor model: the architectural context shared
//! by every stage, the five-stage pipeline, and the execution units (ALU and
//! caches) the stages drive.

/// Architectural state (registers, PC, caches, memory, counters).
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, engine).
pub mod pipeline;

/// Execution units (ALU, cache).
pub mod units;

pub use self::cpu::Cpu;
