//! Simulation output seam.
//!
//! The simulator never prints. Pipe states, statistics and the final register
//! file are handed to a [`Reporter`], so tests can capture them and the CLI can
//! route them to logs or JSON.

use std::fmt::Debug;

use tracing::info;

use crate::common::reg::RegisterDump;
use crate::stats::{PipeState, SimulationStats};

/// Receives observable simulator output.
pub trait Reporter: Debug {
    /// Called when a run entry point stops, with the most recent cycle's snapshot.
    fn pipe_state(&mut self, state: &PipeState);

    /// Called once from finalize with the complete statistics.
    fn stats(&mut self, stats: &SimulationStats);

    /// Called once from finalize with the architectural register file.
    fn registers(&mut self, regs: &RegisterDump);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn pipe_state(&mut self, state: &PipeState) {
        (**self).pipe_state(state);
    }

    fn stats(&mut self, stats: &SimulationStats) {
        (**self).stats(stats);
    }

    fn registers(&mut self, regs: &RegisterDump) {
        (**self).registers(regs);
    }
}

/// Default reporter that emits everything through `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn pipe_state(&mut self, state: &PipeState) {
        info!(target: "mipsim::pipe", "{state}");
    }

    fn stats(&mut self, stats: &SimulationStats) {
        info!(target: "mipsim::stats", "\n{stats}");
    }

    fn registers(&mut self, regs: &RegisterDump) {
        info!(target: "mipsim::regs", "\n{regs}");
    }
}

/// Reporter that keeps everything it receives, for inspection after a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingReporter {
    /// Snapshots in the order they were reported.
    pub pipe_states: Vec<PipeState>,
    /// Statistics reported by finalize.
    pub stats: Option<SimulationStats>,
    /// Registers reported by finalize.
    pub registers: Option<RegisterDump>,
}

impl Reporter for RecordingReporter {
    fn pipe_state(&mut self, state: &PipeState) {
        self.pipe_states.push(*state);
    }

    fn stats(&mut self, stats: &SimulationStats) {
        self.stats = Some(*stats);
    }

    fn registers(&mut self, regs: &RegisterDump) {
        self.registers = Some(*regs);
    }
}
