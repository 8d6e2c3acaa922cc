//! # ALU Tests
//!
//! Signed overflow traps only for ADD, SUB and ADDI; the unsigned variants wrap.

use mipsim_core::common::Trap;
use mipsim_core::core::units::alu::Alu;
use mipsim_core::isa::instruction::{ImmediateOp, ImmediateOpcode, RegisterFunct, RegisterOp};
use proptest::prelude::*;
use rstest::rstest;

fn r(funct: RegisterFunct) -> RegisterOp {
    RegisterOp {
        funct,
        rs: 1,
        rt: 2,
        rd: 3,
        shamt: 0,
    }
}

proptest! {
    #[test]
    fn add_traps_exactly_on_signed_overflow(a in any::<u32>(), b in any::<u32>()) {
        let got = Alu::execute_register(0x1234, &r(RegisterFunct::Add), a, b);
        match (a as i32).checked_add(b as i32) {
            Some(sum) => prop_assert_eq!(got, Ok(Some(sum as u32))),
            None => prop_assert_eq!(got, Err(Trap::ArithmeticOverflow(0x1234))),
        }
    }

    #[test]
    fn sub_traps_exactly_on_signed_overflow(a in any::<u32>(), b in any::<u32>()) {
        let got = Alu::execute_register(7, &r(RegisterFunct::Sub), a, b);
        match (a as i32).checked_sub(b as i32) {
            Some(diff) => prop_assert_eq!(got, Ok(Some(diff as u32))),
            None => prop_assert_eq!(got, Err(Trap::ArithmeticOverflow(7))),
        }
    }

    #[test]
    fn addi_traps_exactly_on_signed_overflow(a in any::<u32>(), imm in any::<u16>()) {
        let op = ImmediateOp::new(ImmediateOpcode::Addi, 1, 2, imm);
        let got = Alu::execute_immediate(9, &op, a);
        match (a as i32).checked_add(i32::from(imm as i16)) {
            Some(sum) => prop_assert_eq!(got, Ok(Some(sum as u32))),
            None => prop_assert_eq!(got, Err(Trap::ArithmeticOverflow(9))),
        }
    }

    #[test]
    fn unsigned_forms_wrap(a in any::<u32>(), b in any::<u32>(), imm in any::<u16>()) {
        prop_assert_eq!(
            Alu::execute_register(0, &r(RegisterFunct::Addu), a, b),
            Ok(Some(a.wrapping_add(b)))
        );
        prop_assert_eq!(
            Alu::execute_register(0, &r(RegisterFunct::Subu), a, b),
            Ok(Some(a.wrapping_sub(b)))
        );
        let op = ImmediateOp::new(ImmediateOpcode::Addiu, 1, 2, imm);
        prop_assert_eq!(
            Alu::execute_immediate(0, &op, a),
            Ok(Some(a.wrapping_add(imm as i16 as i32 as u32)))
        );
    }
}

#[rstest]
#[case::slt_signed(RegisterFunct::Slt, 0xffff_ffff, 1, 1)]
#[case::sltu_unsigned(RegisterFunct::Sltu, 0xffff_ffff, 1, 0)]
#[case::nor(RegisterFunct::Nor, 0x0f0f_0000, 0x0000_0f0f, 0xf0f0_f0f0)]
#[case::and(RegisterFunct::And, 0xff00, 0x0ff0, 0x0f00)]
fn register_logic(#[case] funct: RegisterFunct, #[case] a: u32, #[case] b: u32, #[case] want: u32) {
    assert_eq!(Alu::execute_register(0, &r(funct), a, b), Ok(Some(want)));
}

#[test]
fn shifts_use_shamt_on_rt() {
    let op = RegisterOp {
        shamt: 4,
        ..r(RegisterFunct::Srl)
    };
    assert_eq!(Alu::execute_register(0, &op, 0, 0x8000_0000), Ok(Some(0x0800_0000)));
}

#[rstest]
#[case::lui(ImmediateOpcode::Lui, 0x1234, 0, 0x1234_0000)]
#[case::ori_zero_extends(ImmediateOpcode::Ori, 0x8000, 1, 0x8001)]
#[case::andi_zero_extends(ImmediateOpcode::Andi, 0xffff, 0xffff_1234, 0x1234)]
#[case::slti_signed(ImmediateOpcode::Slti, 0xffff, 0xffff_fffe, 1)]
#[case::sltiu_compares_sign_extended(ImmediateOpcode::Sltiu, 0xffff, 5, 1)]
#[case::sc_reports_success(ImmediateOpcode::Sc, 0, 0, 1)]
fn immediate_results(#[case] opcode: ImmediateOpcode, #[case] imm: u16, #[case] rs: u32, #[case] want: u32) {
    let op = ImmediateOp::new(opcode, 1, 2, imm);
    assert_eq!(Alu::execute_immediate(0, &op, rs), Ok(Some(want)));
}

#[test]
fn loads_and_branches_produce_no_execute_result() {
    for opcode in [ImmediateOpcode::Lw, ImmediateOpcode::Sw, ImmediateOpcode::Beq] {
        let op = ImmediateOp::new(opcode, 1, 2, 4);
        assert_eq!(Alu::execute_immediate(0, &op, 0x100), Ok(None));
        assert_eq!(Alu::effective_address(&op, 0x100), 0x104);
    }
}
