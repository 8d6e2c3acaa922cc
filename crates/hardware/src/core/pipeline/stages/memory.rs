//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! Loads read through the data cache and zero-extend. Stores refresh their data
//! from MEM/WB, truncate it to the access width and write through the data
//! cache. A miss leaves the load result empty and tells the engine to freeze the
//! pipeline until the fill completes.

use tracing::trace;

use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::hazards::forward_store_value;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::soc::traits::MemoryStore;

/// Result of the memory stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryOutput {
    /// Proposed MEM/WB value.
    pub entry: MemWbEntry,
    /// Store data after forwarding, kept in EX/MEM if the pipeline freezes.
    pub store_val: u32,
    /// The data cache missed.
    pub miss: bool,
}

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - CPU state; the data cache and backing store are accessed.
/// * `ex_mem` - Instruction in the memory stage.
/// * `mem_wb` - MEM/WB at the start of the cycle (store data forwarding source).
///
/// # Errors
///
/// Propagates backing-store errors from a cache fill or write-back.
pub fn mem_stage<M: MemoryStore>(
    cpu: &mut Cpu<M>,
    ex_mem: &ExMemEntry,
    mem_wb: &MemWbEntry,
) -> SimResult<MemoryOutput> {
    let mut result = ex_mem.result;
    let mut store_val = ex_mem.store_val;
    let mut miss = false;

    if let Some(size) = ex_mem.op.mem_size() {
        if ex_mem.op.is_store() {
            store_val = size.mask(forward_store_value(ex_mem, mem_wb));
            let outcome = cpu
                .dcache
                .write(&mut cpu.mem, ex_mem.addr, store_val, size, cpu.cycle)?;
            miss = !outcome.is_hit();
        } else {
            let (value, outcome) = cpu.dcache.read(&mut cpu.mem, ex_mem.addr, size, cpu.cycle)?;
            if outcome.is_hit() {
                result = Some(size.mask(value));
            } else {
                miss = true;
            }
        }
        trace!(
            cycle = cpu.cycle,
            addr = format_args!("{:#010x}", ex_mem.addr),
            store = ex_mem.op.is_store(),
            miss,
            "MEM"
        );
    }

    Ok(MemoryOutput {
        entry: MemWbEntry {
            pc: ex_mem.pc,
            inst: ex_mem.inst,
            op: ex_mem.op,
            result,
        },
        store_val,
        miss,
    })
}
