//! Encoders for the MIPS instructions the simulator supports.
//!
//! Register arguments are indices; immediates are passed as the raw 16-bit
//! field so negative offsets are written as `(-8i16) as u16`.

use mipsim_core::common::HALT_WORD;
use mipsim_core::isa::mips32::{funct, opcodes};

pub const NOP: u32 = 0;
pub const HALT: u32 = HALT_WORD;

pub fn r_type(rs: u32, rt: u32, rd: u32, shamt: u32, fn_code: u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | (shamt << 6) | fn_code
}

pub fn i_type(op: u32, rs: u32, rt: u32, imm: u16) -> u32 {
    (op << 26) | (rs << 21) | (rt << 16) | u32::from(imm)
}

pub fn j_type(op: u32, target: u32) -> u32 {
    (op << 26) | (target & 0x03ff_ffff)
}

pub fn add(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADD)
}

pub fn addu(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADDU)
}

pub fn sub(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::SUB)
}

pub fn slt(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::SLT)
}

pub fn sll(rd: u32, rt: u32, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SLL)
}

pub fn jr(rs: u32) -> u32 {
    r_type(rs, 0, 0, 0, funct::JR)
}

pub fn addi(rt: u32, rs: u32, imm: u16) -> u32 {
    i_type(opcodes::OP_ADDI, rs, rt, imm)
}

pub fn addiu(rt: u32, rs: u32, imm: u16) -> u32 {
    i_type(opcodes::OP_ADDIU, rs, rt, imm)
}

pub fn ori(rt: u32, rs: u32, imm: u16) -> u32 {
    i_type(opcodes::OP_ORI, rs, rt, imm)
}

pub fn lui(rt: u32, imm: u16) -> u32 {
    i_type(opcodes::OP_LUI, 0, rt, imm)
}

pub fn lw(rt: u32, offset: u16, base: u32) -> u32 {
    i_type(opcodes::OP_LW, base, rt, offset)
}

pub fn lbu(rt: u32, offset: u16, base: u32) -> u32 {
    i_type(opcodes::OP_LBU, base, rt, offset)
}

pub fn sw(rt: u32, offset: u16, base: u32) -> u32 {
    i_type(opcodes::OP_SW, base, rt, offset)
}

pub fn sb(rt: u32, offset: u16, base: u32) -> u32 {
    i_type(opcodes::OP_SB, base, rt, offset)
}

pub fn sc(rt: u32, offset: u16, base: u32) -> u32 {
    i_type(opcodes::OP_SC, base, rt, offset)
}

pub fn beq(rs: u32, rt: u32, offset: u16) -> u32 {
    i_type(opcodes::OP_BEQ, rs, rt, offset)
}

pub fn bne(rs: u32, rt: u32, offset: u16) -> u32 {
    i_type(opcodes::OP_BNE, rs, rt, offset)
}

pub fn blez(rs: u32, offset: u16) -> u32 {
    i_type(opcodes::OP_BLEZ, rs, 0, offset)
}

pub fn bgtz(rs: u32, offset: u16) -> u32 {
    i_type(opcodes::OP_BGTZ, rs, 0, offset)
}

pub fn j(target: u32) -> u32 {
    j_type(opcodes::OP_J, target)
}

pub fn jal(target: u32) -> u32 {
    j_type(opcodes::OP_JAL, target)
}
