//! MIPS Instruction Decoder.
//!
//! This module translates raw 32-bit instruction words into the `Operation` sum
//! type. Classification is by primary opcode; opcode 0 is further classified by
//! function code. The halt sentinel decodes to `Operation::Halt` and anything
//! outside the supported subset is reported as an illegal instruction.

use crate::common::constants::HALT_WORD;
use crate::common::error::Trap;
use crate::isa::instruction::{
    ImmediateOp, ImmediateOpcode, InstructionBits, JumpOp, JumpOpcode, Operation, RegisterFunct,
    RegisterOp,
};
use crate::isa::mips32::{funct, opcodes};

/// Decodes a raw 32-bit instruction word.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
///
/// # Errors
///
/// Returns [`Trap::IllegalInstruction`] carrying `inst` when the opcode or
/// function code is not part of the supported subset.
pub fn decode(inst: u32) -> Result<Operation, Trap> {
    if inst == HALT_WORD {
        return Ok(Operation::Halt);
    }

    let op = match inst.opcode() {
        opcodes::OP_SPECIAL => Operation::Register(decode_special(inst)?),
        opcodes::OP_J => Operation::Jump(JumpOp {
            opcode: JumpOpcode::J,
            target: inst.target(),
        }),
        opcodes::OP_JAL => Operation::Jump(JumpOp {
            opcode: JumpOpcode::Jal,
            target: inst.target(),
        }),
        opcode => {
            let kind = immediate_opcode(opcode).ok_or(Trap::IllegalInstruction(inst))?;
            Operation::Immediate(ImmediateOp::new(kind, inst.rs(), inst.rt(), inst.imm()))
        }
    };
    Ok(op)
}

/// Decodes an R-type instruction (primary opcode 0).
fn decode_special(inst: u32) -> Result<RegisterOp, Trap> {
    let funct = match inst.funct() {
        funct::ADD => RegisterFunct::Add,
        funct::ADDU => RegisterFunct::Addu,
        funct::AND => RegisterFunct::And,
        funct::JR => RegisterFunct::Jr,
        funct::NOR => RegisterFunct::Nor,
        funct::OR => RegisterFunct::Or,
        funct::SLT => RegisterFunct::Slt,
        funct::SLTU => RegisterFunct::Sltu,
        funct::SLL => RegisterFunct::Sll,
        funct::SRL => RegisterFunct::Srl,
        funct::SUB => RegisterFunct::Sub,
        funct::SUBU => RegisterFunct::Subu,
        _ => return Err(Trap::IllegalInstruction(inst)),
    };
    Ok(RegisterOp {
        funct,
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
    })
}

/// Maps a primary opcode to its I-type operation.
const fn immediate_opcode(opcode: u32) -> Option<ImmediateOpcode> {
    let kind = match opcode {
        opcodes::OP_ADDI => ImmediateOpcode::Addi,
        opcodes::OP_ADDIU => ImmediateOpcode::Addiu,
        opcodes::OP_ANDI => ImmediateOpcode::Andi,
        opcodes::OP_BEQ => ImmediateOpcode::Beq,
        opcodes::OP_BNE => ImmediateOpcode::Bne,
        opcodes::OP_BLEZ => ImmediateOpcode::Blez,
        opcodes::OP_BGTZ => ImmediateOpcode::Bgtz,
        opcodes::OP_LBU => ImmediateOpcode::Lbu,
        opcodes::OP_LHU => ImmediateOpcode::Lhu,
        opcodes::OP_LL => ImmediateOpcode::Ll,
        opcodes::OP_LUI => ImmediateOpcode::Lui,
        opcodes::OP_LW => ImmediateOpcode::Lw,
        opcodes::OP_ORI => ImmediateOpcode::Ori,
        opcodes::OP_SLTI => ImmediateOpcode::Slti,
        opcodes::OP_SLTIU => ImmediateOpcode::Sltiu,
        opcodes::OP_SB => ImmediateOpcode::Sb,
        opcodes::OP_SC => ImmediateOpcode::Sc,
        opcodes::OP_SH => ImmediateOpcode::Sh,
        opcodes::OP_SW => ImmediateOpcode::Sw,
        _ => return None,
    };
    Some(kind)
}
