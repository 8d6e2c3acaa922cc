//! Execute (EX) Stage.
//!
//! Forwards the freshest operand values into the instruction from ID/EX and
//! runs it through the ALU. Signed ADD, ADDI and SUB trap on overflow.

use tracing::trace;

use crate::common::error::Trap;
use crate::core::pipeline::hazards::forward_rs;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::core::units::alu::Alu;
use crate::isa::instruction::Operation;

/// Result of the execute stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Proposed EX/MEM value; a bubble when execute trapped.
    pub entry: ExMemEntry,
    /// Forwarded `(rs, rt)` values, kept in ID/EX if the pipeline freezes.
    pub operands: (u32, u32),
    /// Arithmetic overflow trap.
    pub trap: Option<Trap>,
}

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `id_ex` - Instruction to execute.
/// * `ex_mem` - EX/MEM at the start of the cycle (forwarding source).
/// * `mem_wb` - MEM/WB at the start of the cycle (forwarding source).
pub fn execute_stage(id_ex: &IdExEntry, ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> ExecuteOutput {
    let (rs_val, rt_val) = forward_rs(id_ex, ex_mem, mem_wb);

    let computed = match id_ex.op {
        Operation::Register(reg) => Alu::execute_register(id_ex.inst, &reg, rs_val, rt_val),
        Operation::Immediate(imm) => Alu::execute_immediate(id_ex.inst, &imm, rs_val),
        Operation::Jump(_) | Operation::Halt => Ok(id_ex.result),
    };

    let result = match computed {
        Ok(result) => result,
        Err(trap) => {
            trace!(pc = format_args!("{:#010x}", id_ex.pc), %trap, "EX: trap");
            return ExecuteOutput {
                entry: ExMemEntry::default(),
                operands: (rs_val, rt_val),
                trap: Some(trap),
            };
        }
    };

    let addr = match id_ex.op {
        Operation::Immediate(imm) if imm.opcode.mem_size().is_some() => {
            Alu::effective_address(&imm, rs_val)
        }
        _ => 0,
    };

    ExecuteOutput {
        entry: ExMemEntry {
            pc: id_ex.pc,
            inst: id_ex.inst,
            op: id_ex.op,
            result,
            addr,
            store_val: rt_val,
        },
        operands: (rs_val, rt_val),
        trap: None,
    }
}
