//! Simulation driver, program loading and reporting.
//!
//! Provides the top-level [`Simulator`], utilities for placing a program image
//! in memory, and the [`Reporter`](report::Reporter) seam through which pipe
//! states, statistics and the final register file are delivered.

pub mod loader;
pub mod report;
pub mod simulator;

pub use report::{LogReporter, RecordingReporter, Reporter};
pub use simulator::{FinalState, Simulator};
