//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! architectural state every pipeline stage reads and updates. It coordinates the following:
//! 1. **State Management:** Register file, program counter and cycle counter.
//! 2. **Memory Hierarchy:** The instruction and data caches and the store behind them.
//! 3. **Statistics:** Counters updated by the stages as the pipeline runs.
//!
//! Pipeline latches live in [`Pipeline`](crate::core::pipeline::engine::Pipeline),
//! which receives the `Cpu` explicitly on every cycle.

use crate::common::error::SimResult;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::units::cache::Cache;
use crate::soc::memory::MainMemory;
use crate::soc::traits::MemoryStore;
use crate::stats::SimulationStats;

/// Architectural state of the simulated processor.
#[derive(Debug)]
pub struct Cpu<M: MemoryStore = MainMemory> {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter of the next fetch.
    pub pc: u32,
    /// Instruction cache.
    pub icache: Cache,
    /// Data cache.
    pub dcache: Cache,
    /// Backing store behind both caches.
    pub mem: M,
    /// Number of cycles completed; also the index of the cycle in progress.
    pub cycle: u64,
    /// PC loaded on an illegal instruction or arithmetic overflow.
    pub exception_vector: u32,
    /// Performance counters.
    pub stats: SimulationStats,
}

impl<M: MemoryStore> Cpu<M> {
    /// Creates a CPU with empty caches, zeroed registers and PC 0.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache geometries and the exception vector.
    /// * `mem` - Backing store; ownership moves into the CPU until finalize.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheConfig`](crate::common::error::SimError::InvalidCacheConfig)
    /// if either cache configuration is malformed or the configured memory
    /// size is not a whole number of blocks.
    pub fn new(config: &Config, mem: M) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            regs: RegisterFile::new(),
            pc: 0,
            icache: Cache::new("icache", &config.icache)?,
            dcache: Cache::new("dcache", &config.dcache)?,
            mem,
            cycle: 0,
            exception_vector: config.general.exception_vector,
            stats: SimulationStats::default(),
        })
    }

    /// Returns statistics with the cache counters filled in.
    pub fn snapshot_stats(&self) -> SimulationStats {
        SimulationStats {
            total_cycles: self.cycle,
            icache_hits: self.icache.hits(),
            icache_misses: self.icache.misses(),
            dcache_hits: self.dcache.hits(),
            dcache_misses: self.dcache.misses(),
            ..self.stats
        }
    }
}
