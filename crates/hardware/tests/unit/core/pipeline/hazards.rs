//! # Forwarding and Hazard Tests
//!
//! Runs short programs through the full pipeline and checks both the
//! architectural result and the stall counters.

use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn ex_mem_result_wins_over_mem_wb() {
    let run = TestContext::new()
        .load_program(&[addiu(1, 0, 1), addiu(1, 0, 2), addu(2, 1, 0), HALT])
        .run();
    assert_eq!(run.reg(2), 2);
}

#[test]
fn mem_wb_result_is_forwarded() {
    let run = TestContext::new()
        .load_program(&[addiu(1, 0, 3), NOP, addu(2, 1, 1), HALT])
        .run();
    assert_eq!(run.reg(2), 6);
}

#[test]
fn write_back_precedes_decode() {
    let run = TestContext::new()
        .load_program(&[addiu(1, 0, 4), NOP, NOP, addu(2, 1, 0), HALT])
        .run();
    assert_eq!(run.reg(2), 4);
    assert_eq!(run.stats().stalls_load_use, 0);
}

#[test]
fn both_operands_forward_independently() {
    let run = TestContext::new()
        .load_program(&[addiu(1, 0, 7), addiu(2, 0, 9), sub(3, 2, 1), HALT])
        .run();
    assert_eq!(run.reg(3), 2);
}

#[test]
fn load_use_costs_exactly_one_cycle() {
    let dependent = TestContext::new()
        .poke(0x100, 21)
        .load_program(&[lw(1, 0x100, 0), addu(3, 1, 1), HALT])
        .run();
    let independent = TestContext::new()
        .poke(0x100, 21)
        .load_program(&[lw(1, 0x100, 0), addu(3, 2, 2), HALT])
        .run();

    assert_eq!(dependent.reg(3), 42);
    assert_eq!(dependent.stats().stalls_load_use, 1);
    assert_eq!(independent.stats().stalls_load_use, 0);
    assert_eq!(
        dependent.stats().total_cycles,
        independent.stats().total_cycles + 1
    );
}

#[test]
fn store_after_load_of_its_data_stalls() {
    let run = TestContext::new()
        .poke(0x100, 0x1234_5678)
        .load_program(&[lw(1, 0x100, 0), sw(1, 0x104, 0), HALT])
        .run();
    assert_eq!(run.stats().stalls_load_use, 1);
    assert_eq!(run.word(0x104), 0x1234_5678);
}

#[test]
fn load_into_zero_never_stalls() {
    let run = TestContext::new()
        .poke(0x100, 5)
        .load_program(&[lw(0, 0x100, 0), addu(3, 0, 0), HALT])
        .run();
    assert_eq!(run.stats().stalls_load_use, 0);
    assert_eq!(run.reg(0), 0);
}

#[test]
fn branch_waits_for_alu_operand_in_execute() {
    let run = TestContext::new()
        .load_program(&[
            addiu(1, 0, 1),
            beq(1, 1, 2),
            addiu(2, 0, 7),
            addiu(3, 0, 9),
            HALT,
        ])
        .run();
    assert_eq!(run.stats().stalls_branch, 1);
    assert_eq!((run.reg(2), run.reg(3)), (7, 0));
}

#[test]
fn branch_waits_for_load_through_memory() {
    let run = TestContext::new()
        .poke(0x100, 5)
        .load_program(&[
            lw(1, 0x100, 0),
            bne(1, 0, 2),
            NOP,
            addiu(3, 0, 9),
            HALT,
        ])
        .run();
    // One stall with the load in execute, one with it in memory.
    assert_eq!(run.stats().stalls_branch, 2);
    assert_eq!(run.reg(3), 0);
}

#[test]
fn jr_uses_forwarded_link_register() {
    let run = TestContext::new()
        .load_program(&[
            jal(4),
            addiu(1, 0, 1),
            addiu(2, 0, 2),
            HALT,
            jr(31),
            addiu(3, 0, 3),
        ])
        .run();
    assert!(run.halted);
    assert_eq!(run.reg(31), 8);
    assert_eq!((run.reg(1), run.reg(2), run.reg(3)), (1, 2, 3));
    assert_eq!(run.stats().stalls_branch, 0);
}
