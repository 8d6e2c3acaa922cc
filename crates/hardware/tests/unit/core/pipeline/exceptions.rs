//! # Exception Tests
//!
//! Illegal instructions trap in decode and overflow traps in execute. Both
//! squash the younger instructions and resume at the exception vector, where
//! the harness places a halt.

use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::{TestContext, cache, fast_config};
use mipsim_core::config::Config;

fn overflow_prologue() -> [u32; 2] {
    [lui(1, 0x7fff), ori(1, 1, 0xffff)]
}

#[test]
fn overflow_squashes_and_vectors() {
    let [a, b] = overflow_prologue();
    let run = TestContext::new()
        .load_program(&[a, b, addi(2, 1, 1), addiu(3, 0, 5), addiu(4, 0, 6), HALT])
        .run();
    assert!(run.halted);
    assert_eq!(run.stats().exceptions, 1);
    assert_eq!(run.reg(1), 0x7fff_ffff);
    assert_eq!((run.reg(2), run.reg(3), run.reg(4)), (0, 0, 0));
}

#[test]
fn add_and_sub_overflow_trap() {
    let [a, b] = overflow_prologue();
    let run = TestContext::new()
        .load_program(&[a, b, add(2, 1, 1), HALT])
        .run();
    assert_eq!(run.stats().exceptions, 1);
    assert_eq!(run.reg(2), 0);

    let run = TestContext::new()
        .load_program(&[lui(1, 0x8000), addiu(2, 0, 1), sub(3, 1, 2), HALT])
        .run();
    assert_eq!(run.stats().exceptions, 1);
    assert_eq!(run.reg(3), 0);
}

#[test]
fn unsigned_add_wraps_without_trap() {
    let [a, b] = overflow_prologue();
    let run = TestContext::new()
        .load_program(&[a, b, addiu(2, 1, 1), addu(3, 1, 1), HALT])
        .run();
    assert_eq!(run.stats().exceptions, 0);
    assert_eq!(run.reg(2), 0x8000_0000);
    assert_eq!(run.reg(3), 0xffff_fffe);
}

#[test]
fn illegal_instruction_squashes_fetch() {
    let run = TestContext::new()
        .load_program(&[addiu(1, 0, 3), 0xfc00_0000, addiu(2, 0, 4), addiu(3, 0, 5), HALT])
        .run();
    assert!(run.halted);
    assert_eq!(run.stats().exceptions, 1);
    assert_eq!(run.reg(1), 3);
    assert_eq!((run.reg(2), run.reg(3)), (0, 0));
}

#[test]
fn exception_cancels_a_fetched_halt() {
    // The halt behind the overflowing ADDI is fetched before the trap; the
    // run must still reach the halt at the vector.
    let [a, b] = overflow_prologue();
    let run = TestContext::new()
        .load_program(&[a, b, addi(2, 1, 1), HALT])
        .run();
    assert!(run.halted);
    assert_eq!(run.stats().exceptions, 1);
}

#[test]
fn custom_vector_is_honored() {
    let mut config = fast_config();
    config.general.exception_vector = 0x400;
    let run = TestContext::with_config(config)
        .load_program(&[0xfc00_0000, HALT])
        .run();
    assert!(run.halted);
    assert_eq!(run.stats().exceptions, 1);
    assert_eq!(Config::default().general.exception_vector, 0x8000);
}

#[test]
fn handler_code_runs_after_trap() {
    let run = TestContext::new()
        .poke(0x8000, addiu(9, 0, 0x42))
        .poke(0x8004, HALT)
        .load_program(&[0xfc00_0000])
        .run();
    assert!(run.halted);
    assert_eq!(run.reg(9), 0x42);
}

#[test]
fn data_miss_holds_an_overflow_until_the_load_completes() {
    // The ADDI overflows in EX while the LW ahead of it misses in MEM. The
    // load must finish before the trap squashes anything.
    let slow = Config {
        dcache: cache(16, 1024, 4),
        ..fast_config()
    };
    let [a, b] = overflow_prologue();
    let run = TestContext::with_config(slow)
        .load_program(&[a, b, lw(2, 0x100, 0), addi(3, 1, 1), addiu(4, 0, 6), HALT])
        .poke(0x100, 0xabcd)
        .run();
    assert!(run.halted);
    assert_eq!(run.reg(2), 0xabcd);
    assert_eq!((run.reg(3), run.reg(4)), (0, 0));
    assert_eq!(run.stats().exceptions, 1);
    assert_eq!(run.stats().stalls_mem, 3);
}
