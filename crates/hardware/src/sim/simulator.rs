//! Simulator: owns the CPU, the pipeline and the reporter side-by-side.
//!
//! The pipeline receives the CPU explicitly every cycle, so neither needs to
//! reach into the other and several simulators can run independently.

use tracing::debug;

use crate::common::error::SimResult;
use crate::common::reg::RegisterDump;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::{CycleStatus, Pipeline};
use crate::sim::report::{LogReporter, Reporter};
use crate::soc::memory::MainMemory;
use crate::soc::traits::MemoryStore;
use crate::stats::{PipeState, SimulationStats};

/// Everything left once a run is finalized.
#[derive(Debug)]
pub struct FinalState<M> {
    /// Complete statistics, cache counters included.
    pub stats: SimulationStats,
    /// Architectural register file.
    pub registers: RegisterDump,
    /// Backing store with every dirty cache line written back.
    pub memory: M,
}

/// Top-level simulator: CPU architectural state + pipeline.
#[derive(Debug)]
pub struct Simulator<M: MemoryStore = MainMemory, R: Reporter = LogReporter> {
    /// CPU architectural state (registers, caches, memory, stats).
    pub cpu: Cpu<M>,
    /// Pipeline latches and cycle driver.
    pub pipeline: Pipeline,
    reporter: R,
}

impl<M: MemoryStore> Simulator<M, LogReporter> {
    /// Creates a simulator that reports through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheConfig`](crate::common::error::SimError::InvalidCacheConfig)
    /// if either cache configuration is malformed or does not tile the
    /// configured memory size.
    pub fn new(config: &Config, mem: M) -> SimResult<Self> {
        Self::with_reporter(config, mem, LogReporter)
    }
}

impl<M: MemoryStore, R: Reporter> Simulator<M, R> {
    /// Creates a simulator that delivers its output to `reporter`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheConfig`](crate::common::error::SimError::InvalidCacheConfig)
    /// if either cache configuration is malformed or does not tile the
    /// configured memory size.
    pub fn with_reporter(config: &Config, mem: M, reporter: R) -> SimResult<Self> {
        Ok(Self {
            cpu: Cpu::new(config, mem)?,
            pipeline: Pipeline::new(),
            reporter,
        })
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates backing-store errors raised by a cache access.
    pub fn tick(&mut self) -> SimResult<CycleStatus> {
        self.pipeline.tick(&mut self.cpu)
    }

    /// Runs at most `cycles` cycles, stopping early on halt.
    ///
    /// Reports the most recent pipe state before returning.
    ///
    /// # Returns
    ///
    /// `true` if the halt instruction reached write-back within the budget.
    ///
    /// # Errors
    ///
    /// Propagates backing-store errors raised by a cache access.
    pub fn run_cycles(&mut self, cycles: u64) -> SimResult<bool> {
        let mut status = self.pipeline.status();
        for _ in 0..cycles {
            if status.is_halted() {
                break;
            }
            status = self.tick()?;
        }
        self.reporter.pipe_state(self.pipeline.pipe_state());
        Ok(status.is_halted())
    }

    /// Runs until the halt instruction reaches write-back.
    ///
    /// Reports the final pipe state before returning. A program that never
    /// halts keeps this running; bound it with [`run_cycles`](Self::run_cycles).
    ///
    /// # Errors
    ///
    /// Propagates backing-store errors raised by a cache access.
    pub fn run_till_halt(&mut self) -> SimResult<()> {
        while !self.pipeline.status().is_halted() {
            let _ = self.tick()?;
        }
        self.reporter.pipe_state(self.pipeline.pipe_state());
        Ok(())
    }

    /// Snapshot of the most recent cycle.
    pub const fn pipe_state(&self) -> &PipeState {
        self.pipeline.pipe_state()
    }

    /// Statistics so far, with current cache counters.
    pub fn stats(&self) -> SimulationStats {
        self.cpu.snapshot_stats()
    }

    /// Returns the reporter.
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Ends the run.
    ///
    /// Reports statistics and registers, then writes every dirty line back,
    /// instruction cache first, and hands the backing store back.
    ///
    /// # Errors
    ///
    /// Propagates backing-store errors raised while draining.
    pub fn finalize(mut self) -> SimResult<FinalState<M>> {
        let stats = self.cpu.snapshot_stats();
        let registers = self.cpu.regs.dump();
        self.reporter.stats(&stats);
        self.reporter.registers(&registers);

        let cycle = self.cpu.cycle;
        self.cpu.icache.drain(&mut self.cpu.mem, cycle)?;
        self.cpu.dcache.drain(&mut self.cpu.mem, cycle)?;
        debug!(cycle, "caches drained");

        Ok(FinalState {
            stats,
            registers,
            memory: self.cpu.mem,
        })
    }
}
