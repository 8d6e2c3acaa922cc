//! Pipeline cycle driver.
//!
//! [`Pipeline`] owns the four inter-stage latches and advances them one cycle at
//! a time. Each cycle runs the stages in the order WB, IF, ID, EX, MEM against
//! the latches as they stood at the start of the cycle, then commits the
//! results under a fixed priority:
//!
//! 1. **Memory stall:** A data cache miss holds everything up to EX/MEM and
//!    inserts a bubble into MEM/WB.
//! 2. **Exception:** An illegal instruction or overflow redirects to the
//!    exception vector and squashes the younger instructions.
//! 3. **Decode stall:** A load-use or branch-operand hazard holds the PC and
//!    IF/ID and inserts a bubble into ID/EX.
//! 4. **Fetch stall:** An instruction cache miss holds the PC and inserts a
//!    bubble into IF/ID. A redirect resolved in decode that cycle is deferred
//!    until the delay slot has been fetched.
//! 5. **Normal advance.**
//!
//! A miss of latency `L` freezes the whole pipeline for `L - 1` further cycles;
//! the retried access then hits.

use tracing::{debug, trace};

use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::hazards::StallReason;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::pipeline::stages::{
    FetchUnit, decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::soc::traits::MemoryStore;
use crate::stats::PipeState;

/// Whether the halt sentinel has reached write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CycleStatus {
    /// The program is still running.
    #[default]
    NotHalted,
    /// The halt word was written back.
    Halted,
}

impl CycleStatus {
    /// Returns `true` once halted.
    pub const fn is_halted(self) -> bool {
        matches!(self, Self::Halted)
    }
}

/// The five-stage in-order pipeline.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EX latch.
    pub id_ex: IdExEntry,
    /// EX/MEM latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB latch.
    pub mem_wb: MemWbEntry,
    fetch: FetchUnit,
    deferred_redirect: Option<u32>,
    frozen_cycles: u64,
    status: CycleStatus,
    pipe_state: PipeState,
}

impl Pipeline {
    /// Creates an empty pipeline (all latches hold bubbles).
    pub fn new() -> Self {
        Self::default()
    }

    /// Halt status after the most recent cycle.
    pub const fn status(&self) -> CycleStatus {
        self.status
    }

    /// Stage occupancy of the most recent cycle.
    pub const fn pipe_state(&self) -> &PipeState {
        &self.pipe_state
    }

    /// Remaining cycles the pipeline stays frozen on an outstanding cache fill.
    pub const fn frozen_cycles(&self) -> u64 {
        self.frozen_cycles
    }

    /// Returns `true` once the halt word has been fetched and not squashed.
    pub const fn halt_seen(&self) -> bool {
        self.fetch.halt_seen()
    }

    /// Advances the pipeline by one cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Memory`](crate::common::error::SimError::Memory) if
    /// a cache fill or write-back touches an address outside the backing store.
    pub fn tick<M: MemoryStore>(&mut self, cpu: &mut Cpu<M>) -> SimResult<CycleStatus> {
        if self.frozen_cycles > 0 {
            self.frozen_cycles -= 1;
            self.pipe_state.cycle = cpu.cycle;
            cpu.stats.stalls_mem += 1;
            cpu.cycle += 1;
            return Ok(self.status);
        }

        if wb_stage(cpu, &self.mem_wb) {
            debug!(cycle = cpu.cycle, "halt reached write-back");
            self.status = CycleStatus::Halted;
        }

        let fetch = fetch_stage(cpu, &mut self.fetch)?;
        let decode = decode_stage(cpu, &self.if_id, &self.id_ex, &self.ex_mem);
        let execute = execute_stage(&self.id_ex, &self.ex_mem, &self.mem_wb);
        let memory = mem_stage(cpu, &self.ex_mem, &self.mem_wb)?;

        let mut next_pc = match self.deferred_redirect {
            Some(target) => target,
            None => cpu.pc.wrapping_add(4),
        };
        if let Some(target) = decode.redirect {
            next_pc = target;
        }

        // An overflow in EX is older than anything decode saw.
        let trap = if memory.miss {
            None
        } else {
            execute.trap.or(decode.trap)
        };
        let ex_trapped = trap.is_some() && execute.trap.is_some();

        self.pipe_state = PipeState {
            cycle: cpu.cycle,
            if_inst: if trap.is_some() { 0 } else { fetch.entry.inst },
            id_inst: if trap.is_some() { 0 } else { decode.entry.inst },
            ex_inst: if ex_trapped { 0 } else { execute.entry.inst },
            mem_inst: memory.entry.inst,
            wb_inst: self.mem_wb.inst,
        };
        trace!(state = %self.pipe_state, "cycle");

        let mut miss_latency = 0;
        if fetch.miss {
            miss_latency = cpu.icache.miss_latency();
        }
        if memory.miss {
            miss_latency = miss_latency.max(cpu.dcache.miss_latency());
        }

        if memory.miss {
            // Held stages keep the values they forwarded this cycle; MEM/WB is
            // retired and would no longer be available to them.
            (self.id_ex.rs_val, self.id_ex.rt_val) = execute.operands;
            self.ex_mem.store_val = memory.store_val;
            self.mem_wb = MemWbEntry::default();
        } else if let Some(trap) = trap {
            debug!(
                cycle = cpu.cycle,
                %trap,
                vector = format_args!("{:#010x}", cpu.exception_vector),
                "exception"
            );
            cpu.stats.exceptions += 1;
            cpu.pc = cpu.exception_vector;
            self.if_id = IfIdEntry::default();
            self.id_ex = IdExEntry::default();
            self.ex_mem = if ex_trapped {
                ExMemEntry::default()
            } else {
                execute.entry
            };
            self.mem_wb = memory.entry;
            self.fetch.squash();
            self.deferred_redirect = None;
        } else if let Some(reason) = decode.stall {
            trace!(cycle = cpu.cycle, ?reason, "ID: stall");
            match reason {
                StallReason::LoadUse => cpu.stats.stalls_load_use += 1,
                StallReason::BranchOperand => cpu.stats.stalls_branch += 1,
            }
            self.id_ex = IdExEntry::default();
            self.ex_mem = execute.entry;
            self.mem_wb = memory.entry;
        } else if fetch.miss {
            if decode.redirect.is_some() {
                self.deferred_redirect = decode.redirect;
            }
            self.if_id = IfIdEntry::default();
            self.id_ex = decode.entry;
            self.ex_mem = execute.entry;
            self.mem_wb = memory.entry;
        } else {
            cpu.pc = next_pc;
            self.if_id = fetch.entry;
            self.id_ex = decode.entry;
            self.ex_mem = execute.entry;
            self.mem_wb = memory.entry;
            self.fetch.commit();
            self.deferred_redirect = None;
        }

        if miss_latency > 0 {
            self.frozen_cycles = self.frozen_cycles.max(miss_latency.saturating_sub(1));
        }

        cpu.cycle += 1;
        Ok(self.status)
    }
}
