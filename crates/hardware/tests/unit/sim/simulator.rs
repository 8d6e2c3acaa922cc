//! # Simulator Entry Point Tests

use mipsim_core::config::Config;
use mipsim_core::sim::{RecordingReporter, Simulator};
use mipsim_core::soc::MainMemory;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::{TestContext, cache, fast_config};

#[test]
fn finalize_reports_stats_and_registers() {
    let run = TestContext::new()
        .load_program(&[addiu(4, 0, 0x1234), HALT])
        .run();
    let stats = run.reporter.stats.expect("stats reported");
    let regs = run.reporter.registers.expect("registers reported");
    assert_eq!(&stats, run.stats());
    assert_eq!(regs.get(4), 0x1234);
    assert!(regs.to_string().contains("$4  a0   = 0x00001234"));
}

#[test]
fn run_cycles_stops_at_halt() {
    let mut sim = TestContext::new().load_program(&[HALT]).build().unwrap();
    assert!(sim.run_cycles(100).unwrap());
    assert_eq!(sim.cpu.cycle, 6);
    // Already halted: no further cycles run.
    assert!(sim.run_cycles(10).unwrap());
    assert_eq!(sim.cpu.cycle, 6);
    assert_eq!(sim.reporter().pipe_states.len(), 2);
}

#[test]
fn tick_advances_one_cycle() {
    let mut sim = TestContext::new().load_program(&[HALT]).build().unwrap();
    let status = sim.tick().unwrap();
    assert!(!status.is_halted());
    assert_eq!(sim.cpu.cycle, 1);
    assert_eq!(sim.pipe_state().cycle, 0);
}

#[test]
fn independent_simulators_do_not_interfere() {
    let handles: Vec<_> = (1..=4u16)
        .map(|n| {
            std::thread::spawn(move || {
                TestContext::new()
                    .load_program(&[addiu(2, 0, n), HALT])
                    .run()
                    .reg(2)
            })
        })
        .collect();
    let results: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![1, 2, 3, 4]);
}

#[test]
fn invalid_cache_config_is_reported() {
    let config = Config {
        dcache: cache(16, 24, 1),
        ..fast_config()
    };
    let result = Simulator::with_reporter(&config, MainMemory::new(64), RecordingReporter::default());
    assert!(result.is_err());
}
