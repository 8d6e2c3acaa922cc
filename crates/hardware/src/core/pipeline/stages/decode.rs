//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline.
//! It performs the following:
//! 1. **Decoding:** Turns the raw word into an [`Operation`], trapping on unknown encodings.
//! 2. **Operand Read:** Reads `rs` and `rt` after write-back has committed this cycle.
//! 3. **Control Flow:** Resolves branches, J, JAL and JR with EX/MEM forwarding.
//! 4. **Hazards:** Reports load-use and branch-operand stalls.

use tracing::trace;

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{
    StallReason, forward_branch_operands, need_stall_branch, need_stall_load_use,
};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry};
use crate::isa::decode::decode;
use crate::isa::instruction::{
    ImmediateOpcode, InstructionBits, JumpOpcode, Operation, RegisterFunct,
};
use crate::soc::traits::MemoryStore;

/// Result of the decode stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Proposed ID/EX value; a bubble when decode trapped.
    pub entry: IdExEntry,
    /// Next fetch address when a branch is taken or a jump is decoded.
    pub redirect: Option<u32>,
    /// Set when decode must hold for a cycle.
    pub stall: Option<StallReason>,
    /// Illegal instruction trap.
    pub trap: Option<Trap>,
}

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - CPU state; only the register file is read.
/// * `if_id` - Word being decoded.
/// * `id_ex` - Instruction currently in execute, for hazard checks.
/// * `ex_mem` - Instruction currently in memory, for hazard checks and branch forwarding.
pub fn decode_stage<M: MemoryStore>(
    cpu: &Cpu<M>,
    if_id: &IfIdEntry,
    id_ex: &IdExEntry,
    ex_mem: &ExMemEntry,
) -> DecodeOutput {
    let inst = if_id.inst;
    let pc = if_id.pc;

    let op = match decode(inst) {
        Ok(op) => op,
        Err(trap) => {
            trace!(cycle = cpu.cycle, pc = format_args!("{pc:#010x}"), %trap, "ID: trap");
            return DecodeOutput {
                trap: Some(trap),
                ..DecodeOutput::default()
            };
        }
    };

    let rs_val = cpu.regs.read(inst.rs());
    let rt_val = cpu.regs.read(inst.rt());
    let mut entry = IdExEntry {
        pc,
        inst,
        op,
        rs_val,
        rt_val,
        result: None,
    };

    let mut redirect = None;
    match op {
        Operation::Immediate(imm) if imm.opcode.is_branch() => {
            let (a, b) = forward_branch_operands(inst, rs_val, rt_val, ex_mem);
            let taken = match imm.opcode {
                ImmediateOpcode::Beq => a == b,
                ImmediateOpcode::Bne => a != b,
                ImmediateOpcode::Blez => (a as i32) <= 0,
                ImmediateOpcode::Bgtz => (a as i32) > 0,
                _ => false,
            };
            if taken {
                redirect = Some(imm.branch_target(pc));
            }
        }
        Operation::Register(reg) if reg.funct == RegisterFunct::Jr => {
            let (target, _) = forward_branch_operands(inst, rs_val, rt_val, ex_mem);
            redirect = Some(target);
        }
        Operation::Jump(jump) => {
            redirect = Some(jump.destination(pc));
            if jump.opcode == JumpOpcode::Jal {
                entry.result = Some(pc.wrapping_add(8));
            }
        }
        _ => {}
    }

    let stall = if need_stall_branch(&op, id_ex, ex_mem) {
        Some(StallReason::BranchOperand)
    } else if need_stall_load_use(id_ex, &op) {
        Some(StallReason::LoadUse)
    } else {
        None
    };

    DecodeOutput {
        entry,
        redirect,
        stall,
        trap: None,
    }
}
