//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Each entry carries the PC, raw word and decoded operation.
//! 2. **Pending Writes:** `result: Option<u32>` holds the value headed for the
//!    register file; `None` means nothing to write (yet).
//! 3. **Bubbles:** `Default` is a bubble holding word 0, which decodes to
//!    `sll $zero, $zero, 0` and therefore writes nothing.
//!
//! Latches are never mutated in place by a stage; the engine replaces each one
//! wholesale at the end of a cycle.

use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::Operation;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded operation.
    pub op: Operation,
    /// Value of `rs` read in decode (refreshed by forwarding in execute).
    pub rs_val: u32,
    /// Value of `rt` read in decode (refreshed by forwarding in execute).
    pub rt_val: u32,
    /// Result already known in decode (JAL's link address).
    pub result: Option<u32>,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded operation.
    pub op: Operation,
    /// ALU result; `None` for loads until the memory stage fills it in.
    pub result: Option<u32>,
    /// Effective address for loads and stores.
    pub addr: u32,
    /// Data to be stored (for store instructions).
    pub store_val: u32,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decoded operation.
    pub op: Operation,
    /// Value written to the destination register in write-back.
    pub result: Option<u32>,
}

impl PipelineLatch for IfIdEntry {
    fn inst(&self) -> u32 {
        self.inst
    }

    fn pending_write(&self) -> Option<(usize, u32)> {
        None
    }
}

impl PipelineLatch for IdExEntry {
    fn inst(&self) -> u32 {
        self.inst
    }

    fn pending_write(&self) -> Option<(usize, u32)> {
        pending(&self.op, self.result)
    }
}

impl PipelineLatch for ExMemEntry {
    fn inst(&self) -> u32 {
        self.inst
    }

    fn pending_write(&self) -> Option<(usize, u32)> {
        pending(&self.op, self.result)
    }
}

impl PipelineLatch for MemWbEntry {
    fn inst(&self) -> u32 {
        self.inst
    }

    fn pending_write(&self) -> Option<(usize, u32)> {
        pending(&self.op, self.result)
    }
}

fn pending(op: &Operation, result: Option<u32>) -> Option<(usize, u32)> {
    match (op.dest(), result) {
        (Some(rd), Some(val)) if rd != 0 => Some((rd, val)),
        _ => None,
    }
}
