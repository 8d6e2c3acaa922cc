//! Writeback (WB) Stage.
//!
//! Commits the MEM/WB result to the register file. This runs first in every
//! cycle so that decode observes the value written in the same cycle.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::traits::MemoryStore;

/// Executes the writeback stage of the pipeline.
///
/// Counts every non-bubble word as retired.
///
/// # Returns
///
/// `true` if the instruction written back is the halt sentinel.
pub fn wb_stage<M: MemoryStore>(cpu: &mut Cpu<M>, mem_wb: &MemWbEntry) -> bool {
    if let Some((rd, val)) = mem_wb.pending_write() {
        trace!(cycle = cpu.cycle, rd, val = format_args!("{val:#010x}"), "WB");
        cpu.regs.write(rd, val);
    }
    if !mem_wb.is_bubble() {
        cpu.stats.instructions_retired += 1;
    }
    mem_wb.op.is_halt()
}
