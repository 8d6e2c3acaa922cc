//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived CPI/IPC.
//! 2. **Stalls:** Data hazard (load-use, branch operand) and cache-miss stall counts.
//! 3. **Cache hierarchy:** First-byte hit/miss counts for the instruction and data caches.
//! 4. **Pipe state:** Per-cycle snapshot of the instruction word occupying each stage.

use std::fmt;

use serde::Serialize;

/// Simulation statistics structure.
///
/// Counters are updated by the pipeline as it runs; cache counters are copied
/// from the caches when the simulator is finalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimulationStats {
    /// Total simulator cycles elapsed.
    pub total_cycles: u64,
    /// Number of non-bubble instructions that reached write-back.
    pub instructions_retired: u64,

    /// Instruction cache hit count.
    pub icache_hits: u64,
    /// Instruction cache miss count.
    pub icache_misses: u64,
    /// Data cache hit count.
    pub dcache_hits: u64,
    /// Data cache miss count.
    pub dcache_misses: u64,

    /// Decode stalls caused by a load feeding the next instruction.
    pub stalls_load_use: u64,
    /// Decode stalls waiting for a branch or JR operand.
    pub stalls_branch: u64,
    /// Cycles the pipeline was frozen waiting for a cache fill.
    pub stalls_mem: u64,

    /// Illegal instruction and overflow exceptions taken.
    pub exceptions: u64,
}

impl SimulationStats {
    /// Cycles per retired instruction, or 0 when nothing retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.total_cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Retired instructions per cycle, or 0 before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.total_cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.total_cycles as f64
        }
    }
}

/// Hit rate in percent, or 0 when there were no accesses.
fn hit_rate(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        (hits as f64 / total as f64) * 100.0
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "MIPS PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.total_cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "STALLS")?;
        writeln!(f, "  stalls.load_use        {}", self.stalls_load_use)?;
        writeln!(f, "  stalls.branch          {}", self.stalls_branch)?;
        writeln!(f, "  stalls.mem             {}", self.stalls_mem)?;
        writeln!(f, "  exceptions             {}", self.exceptions)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "MEMORY HIERARCHY")?;
        writeln!(
            f,
            "  icache                 hits={:<10} misses={:<10} ({:.2}% hit)",
            self.icache_hits,
            self.icache_misses,
            hit_rate(self.icache_hits, self.icache_misses)
        )?;
        writeln!(
            f,
            "  dcache                 hits={:<10} misses={:<10} ({:.2}% hit)",
            self.dcache_hits,
            self.dcache_misses,
            hit_rate(self.dcache_hits, self.dcache_misses)
        )?;
        write!(f, "==========================================================")
    }
}

/// Instruction word occupying each pipeline stage during one cycle.
///
/// Bubbles show as 0. During a cycle frozen by a cache fill, the words from the
/// last active cycle are repeated with the new cycle index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PipeState {
    /// Zero-based index of the cycle this snapshot describes.
    pub cycle: u64,
    /// Word fetched this cycle.
    pub if_inst: u32,
    /// Word decoded this cycle.
    pub id_inst: u32,
    /// Word executed this cycle.
    pub ex_inst: u32,
    /// Word in the memory stage this cycle.
    pub mem_inst: u32,
    /// Word written back this cycle.
    pub wb_inst: u32,
}

impl fmt::Display for PipeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycle {:>6} | IF {:#010x} | ID {:#010x} | EX {:#010x} | MEM {:#010x} | WB {:#010x}",
            self.cycle, self.if_inst, self.id_inst, self.ex_inst, self.mem_inst, self.wb_inst
        )
    }
}
