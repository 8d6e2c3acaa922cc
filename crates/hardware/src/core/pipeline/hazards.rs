//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for keeping the pipeline consistent when data
//! dependencies exist between in-flight instructions. It provides:
//! 1. **Hazard Detection:** Load-use and branch-operand hazards that require a decode stall.
//! 2. **Operand Forwarding:** Bypassing the register file from EX/MEM and MEM/WB.
//! 3. **Store Forwarding:** Refreshing store data in the memory stage.
//!
//! Forwarding sources are always the latches as they stood at the start of the
//! cycle. MEM/WB is consulted first and EX/MEM second, so the younger producer wins.

use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::{InstructionBits, Operation};

/// Reason decode was held for a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StallReason {
    /// A load in execute produces a register the decoding instruction reads.
    LoadUse,
    /// A branch or JR operand is not yet available for resolution in decode.
    BranchOperand,
}

/// Checks if a stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in Decode reads a register
/// that the load currently in Execute has not yet fetched from memory. Stores
/// count their data register as a read, so a store right after a load of the
/// same register stalls exactly like any other consumer.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch (instruction currently in execute).
/// * `decoding` - The operation being decoded.
///
/// # Returns
///
/// `true` if a one-cycle stall is required.
///
/// # Examples
///
/// ```ignore
/// // ID/EX stage: lw  $1, 0($2)     <- loads into $1 (in execute)
/// // IF/ID stage: add $3, $1, $4    <- uses $1 (in decode)
/// //
/// // This creates a load-use hazard requiring a 1-cycle stall
/// let stall_needed = need_stall_load_use(&id_ex, &decoded);
/// ```
pub fn need_stall_load_use(id_ex: &IdExEntry, decoding: &Operation) -> bool {
    if !id_ex.op.is_load() {
        return false;
    }
    match id_ex.op.dest() {
        Some(rd) => decoding.reads(rd),
        None => false,
    }
}

/// Checks if a branch or JR in decode must wait for its operands.
///
/// Branches resolve in decode, so an operand still being computed in Execute
/// cannot be used, and neither can a load result still in the memory stage.
/// A plain ALU result in EX/MEM is forwarded instead (see [`forward_branch_operands`]).
///
/// # Arguments
///
/// * `decoding` - The operation being decoded.
/// * `id_ex` - The ID/EX latch (instruction currently in execute).
/// * `ex_mem` - The EX/MEM latch (instruction currently in memory).
///
/// # Returns
///
/// `true` if decode must stall for a cycle.
pub fn need_stall_branch(decoding: &Operation, id_ex: &IdExEntry, ex_mem: &ExMemEntry) -> bool {
    if !decoding.is_branch() {
        return false;
    }
    let in_execute = id_ex.op.dest().is_some_and(|rd| decoding.reads(rd));
    let load_in_memory =
        ex_mem.op.is_load() && ex_mem.op.dest().is_some_and(|rd| decoding.reads(rd));
    in_execute || load_in_memory
}

/// Forwards EX/MEM results into the operands of a branch being resolved in decode.
///
/// MEM/WB needs no path here: write-back commits before decode reads the
/// register file within the same cycle.
///
/// # Returns
///
/// The `(rs, rt)` values to compare.
pub fn forward_branch_operands(
    inst: u32,
    rs_val: u32,
    rt_val: u32,
    ex_mem: &ExMemEntry,
) -> (u32, u32) {
    (
        ex_mem.forwards(inst.rs()).unwrap_or(rs_val),
        ex_mem.forwards(inst.rt()).unwrap_or(rt_val),
    )
}

/// Forwards register values from later pipeline stages into the execute operands.
///
/// Both operands are checked against both sources independently. MEM/WB is
/// applied first and EX/MEM second, so the most recent result wins.
///
/// # Arguments
///
/// * `id_ex` - The instruction entering execute.
/// * `ex_mem` - EX/MEM latch at the start of the cycle (one instruction older).
/// * `mem_wb` - MEM/WB latch at the start of the cycle (two instructions older).
///
/// # Returns
///
/// A tuple `(rs_val, rt_val)` containing the most recent available register values.
pub fn forward_rs(id_ex: &IdExEntry, ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> (u32, u32) {
    let (rs, rt) = (id_ex.inst.rs(), id_ex.inst.rt());
    let mut a = id_ex.rs_val;
    let mut b = id_ex.rt_val;

    if let Some(val) = mem_wb.forwards(rs) {
        a = val;
    }
    if let Some(val) = mem_wb.forwards(rt) {
        b = val;
    }
    if let Some(val) = ex_mem.forwards(rs) {
        a = val;
    }
    if let Some(val) = ex_mem.forwards(rt) {
        b = val;
    }
    (a, b)
}

/// Refreshes the store data of a store in the memory stage from MEM/WB.
///
/// # Returns
///
/// The value to write to memory.
pub fn forward_store_value(ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> u32 {
    mem_wb
        .forwards(ex_mem.inst.rt())
        .unwrap_or(ex_mem.store_val)
}
