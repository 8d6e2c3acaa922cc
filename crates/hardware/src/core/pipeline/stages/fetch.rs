//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the word at the current Program Counter through the instruction
//! cache. Two pieces of state survive between cycles:
//! 1. **Fetch buffer:** The last word fetched but not yet latched, reused while
//!    the PC is held so a stalled fetch does not touch the cache again.
//! 2. **Halt seen:** Once the halt word has been fetched, later fetches yield
//!    bubbles until an exception squashes the halt.

use tracing::trace;

use crate::common::constants::HALT_WORD;
use crate::common::data::MemEntrySize;
use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::disasm::disassemble;
use crate::soc::traits::MemoryStore;

/// Fetch state carried across cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchUnit {
    halt_seen: bool,
    buffer: Option<IfIdEntry>,
}

impl FetchUnit {
    /// Returns `true` once the halt word has been fetched.
    pub const fn halt_seen(&self) -> bool {
        self.halt_seen
    }

    /// Drops the buffered word after it has been latched into IF/ID.
    pub const fn commit(&mut self) {
        self.buffer = None;
    }

    /// Forgets everything fetched on the squashed path, including a halt.
    pub const fn squash(&mut self) {
        self.halt_seen = false;
        self.buffer = None;
    }
}

/// Result of the fetch stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchOutput {
    /// Proposed IF/ID value; a bubble on a miss.
    pub entry: IfIdEntry,
    /// The instruction cache missed; the engine must hold the PC.
    pub miss: bool,
}

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - CPU state; the instruction cache is accessed at `cpu.pc`.
/// * `unit` - Fetch buffer and halt tracking.
///
/// # Errors
///
/// Propagates backing-store errors from a cache fill or write-back.
pub fn fetch_stage<M: MemoryStore>(cpu: &mut Cpu<M>, unit: &mut FetchUnit) -> SimResult<FetchOutput> {
    let pc = cpu.pc;

    let entry = if let Some(buffered) = unit.buffer.filter(|b| b.pc == pc) {
        buffered
    } else if unit.halt_seen {
        IfIdEntry { pc, inst: 0 }
    } else {
        let (inst, outcome) = cpu.icache.read(&mut cpu.mem, pc, MemEntrySize::Word, cpu.cycle)?;
        if !outcome.is_hit() {
            trace!(cycle = cpu.cycle, pc = format_args!("{pc:#010x}"), "IF: icache miss");
            return Ok(FetchOutput {
                entry: IfIdEntry { pc, inst: 0 },
                miss: true,
            });
        }
        let fetched = IfIdEntry { pc, inst };
        unit.buffer = Some(fetched);
        fetched
    };

    if entry.inst == HALT_WORD {
        unit.halt_seen = true;
    }

    trace!(
        cycle = cpu.cycle,
        pc = format_args!("{pc:#010x}"),
        inst = format_args!("{:#010x}", entry.inst),
        asm = %disassemble(entry.inst),
        "IF"
    );

    Ok(FetchOutput { entry, miss: false })
}
