//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The per-cycle driver and the commit priority between stalls and exceptions.
//! 2. **Hazards:** Detection of load-use and branch-operand hazards, and operand forwarding.
//! 3. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 5. **Traits:** Common interface shared by the latches.

/// Cycle driver owning the latches.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;

pub use engine::{CycleStatus, Pipeline};
