//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It
//! evaluates R-type and I-type operations on 32-bit operands and detects
//! signed overflow for the trapping arithmetic instructions.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add and Sub, checked and wrapping
//! - [`logic`]:      And, Or, Nor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use crate::common::error::Trap;
use crate::isa::instruction::{ImmediateOp, ImmediateOpcode, RegisterFunct, RegisterOp};

/// Result produced by SC. The simulator runs a single hart, so the
/// conditional store always succeeds.
const SC_SUCCESS: u32 = 1;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// A result of `Ok(None)` means the instruction writes nothing in execute:
/// loads produce their value in the memory stage, while stores, branches
/// and JR write no register at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Executes an R-type operation.
    ///
    /// # Arguments
    ///
    /// * `inst`   - Raw instruction word, carried into any trap raised.
    /// * `op`     - The decoded operation.
    /// * `rs_val` - Forwarded value of `rs`.
    /// * `rt_val` - Forwarded value of `rt`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::ArithmeticOverflow`] when ADD or SUB overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::instruction::{RegisterFunct, RegisterOp};
    ///
    /// let op = RegisterOp { funct: RegisterFunct::Addu, rs: 1, rt: 2, rd: 3, shamt: 0 };
    /// assert_eq!(Alu::execute_register(0, &op, u32::MAX, 2), Ok(Some(1)));
    /// ```
    pub fn execute_register(
        inst: u32,
        op: &RegisterOp,
        rs_val: u32,
        rt_val: u32,
    ) -> Result<Option<u32>, Trap> {
        let overflow = Trap::ArithmeticOverflow(inst);
        let value = match op.funct {
            RegisterFunct::Add => arithmetic::add_checked(rs_val, rt_val).ok_or(overflow)?,
            RegisterFunct::Sub => arithmetic::sub_checked(rs_val, rt_val).ok_or(overflow)?,
            RegisterFunct::Addu => arithmetic::add_wrapping(rs_val, rt_val),
            RegisterFunct::Subu => arithmetic::sub_wrapping(rs_val, rt_val),
            RegisterFunct::And => logic::and(rs_val, rt_val),
            RegisterFunct::Or => logic::or(rs_val, rt_val),
            RegisterFunct::Nor => logic::nor(rs_val, rt_val),
            RegisterFunct::Slt => logic::slt(rs_val, rt_val),
            RegisterFunct::Sltu => logic::sltu(rs_val, rt_val),
            RegisterFunct::Sll => shifts::sll(rt_val, op.shamt),
            RegisterFunct::Srl => shifts::srl(rt_val, op.shamt),
            RegisterFunct::Jr => return Ok(None),
        };
        Ok(Some(value))
    }

    /// Executes an I-type operation.
    ///
    /// # Arguments
    ///
    /// * `inst`   - Raw instruction word, carried into any trap raised.
    /// * `op`     - The decoded operation.
    /// * `rs_val` - Forwarded value of `rs`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::ArithmeticOverflow`] when ADDI overflows.
    pub fn execute_immediate(inst: u32, op: &ImmediateOp, rs_val: u32) -> Result<Option<u32>, Trap> {
        let value = match op.opcode {
            ImmediateOpcode::Addi => arithmetic::add_checked(rs_val, op.se_imm)
                .ok_or(Trap::ArithmeticOverflow(inst))?,
            ImmediateOpcode::Addiu => arithmetic::add_wrapping(rs_val, op.se_imm),
            ImmediateOpcode::Andi => logic::and(rs_val, op.ze_imm),
            ImmediateOpcode::Ori => logic::or(rs_val, op.ze_imm),
            ImmediateOpcode::Slti => logic::slt(rs_val, op.se_imm),
            ImmediateOpcode::Sltiu => logic::sltu(rs_val, op.se_imm),
            ImmediateOpcode::Lui => op.ze_imm << 16,
            ImmediateOpcode::Sc => SC_SUCCESS,
            ImmediateOpcode::Beq
            | ImmediateOpcode::Bne
            | ImmediateOpcode::Blez
            | ImmediateOpcode::Bgtz
            | ImmediateOpcode::Lbu
            | ImmediateOpcode::Lhu
            | ImmediateOpcode::Lw
            | ImmediateOpcode::Ll
            | ImmediateOpcode::Sb
            | ImmediateOpcode::Sh
            | ImmediateOpcode::Sw => return Ok(None),
        };
        Ok(Some(value))
    }

    /// Computes the effective address `rs + se(imm)` of a load or store.
    #[inline]
    pub const fn effective_address(op: &ImmediateOp, rs_val: u32) -> u32 {
        rs_val.wrapping_add(op.se_imm)
    }
}
