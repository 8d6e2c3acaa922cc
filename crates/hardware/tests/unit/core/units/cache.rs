//! # Cache Tests
//!
//! Exercises the write-back cache directly against a `MainMemory` or a mocked
//! store: pending fills, first-byte accounting, LRU replacement, write-back
//! addressing and draining.

use mipsim_core::common::{MemEntrySize, SimError};
use mipsim_core::config::{Associativity, CacheConfig};
use mipsim_core::core::units::cache::{Cache, CacheOutcome};
use mipsim_core::soc::MainMemory;
use mipsim_core::soc::traits::MemoryStore;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::harness::cache;
use crate::common::mocks::memory::MockStore;

fn two_way(block_size: u32, cache_size: u32, miss_latency: u64) -> CacheConfig {
    CacheConfig {
        associativity: Associativity::TwoWay,
        ..cache(block_size, cache_size, miss_latency)
    }
}

fn build(config: &CacheConfig) -> Cache {
    Cache::new("dcache", config).expect("valid geometry")
}

#[test]
fn miss_then_hit_after_latency() {
    let mut mem = MainMemory::new(256);
    mem.set_value(0x10, 0xdead_beef, MemEntrySize::Word).unwrap();
    let mut c = build(&cache(16, 64, 5));

    let (_, first) = c.read(&mut mem, 0x10, MemEntrySize::Word, 0).unwrap();
    assert_eq!(first, CacheOutcome::Miss);

    let (_, pending) = c.read(&mut mem, 0x10, MemEntrySize::Word, 4).unwrap();
    assert_eq!(pending, CacheOutcome::Miss);

    let (value, ready) = c.read(&mut mem, 0x10, MemEntrySize::Word, 5).unwrap();
    assert_eq!(ready, CacheOutcome::Hit);
    assert_eq!(value, 0xdead_beef);

    assert_eq!((c.hits(), c.misses()), (1, 2));
}

#[test]
fn pending_line_is_not_refilled() {
    let mut store = MockStore::new();
    store.expect_get_value().times(16).returning(|_, _| Ok(0));
    let mut c = build(&cache(16, 64, 10));

    let _ = c.read(&mut store, 0, MemEntrySize::Word, 0).unwrap();
    let (_, outcome) = c.read(&mut store, 4, MemEntrySize::Word, 3).unwrap();
    assert_eq!(outcome, CacheOutcome::Miss);
}

#[test]
fn four_set_direct_mapped_fill_takes_ten_cycles() {
    let mut store = MockStore::new();
    store
        .expect_get_value()
        .times(4)
        .returning(|addr, _| Ok(0x11 + addr));
    let mut c = build(&cache(4, 16, 10));

    let (_, first) = c.read(&mut store, 0x0, MemEntrySize::Word, 0).unwrap();
    assert_eq!(first, CacheOutcome::Miss);

    let (_, early) = c.read(&mut store, 0x0, MemEntrySize::Word, 9).unwrap();
    assert_eq!(early, CacheOutcome::Miss);

    let (value, ready) = c.read(&mut store, 0x0, MemEntrySize::Word, 10).unwrap();
    assert_eq!(ready, CacheOutcome::Hit);
    assert_eq!(value, 0x1112_1314);
    assert_eq!((c.hits(), c.misses()), (1, 2));
}

#[test]
fn straddling_access_counts_first_byte_only() {
    let mut mem = MainMemory::new(256);
    let mut c = build(&cache(4, 64, 0));

    // Warm the block holding 0x04 only.
    let _ = c.read(&mut mem, 0x04, MemEntrySize::Byte, 0).unwrap();
    let (_, outcome) = c.read(&mut mem, 0x06, MemEntrySize::Word, 1).unwrap();

    assert_eq!(outcome, CacheOutcome::Hit);
    assert_eq!((c.hits(), c.misses()), (1, 1));
    assert!(c.probe(0x08));
}

#[test]
fn two_way_evicts_least_recently_used() {
    let mut mem = MainMemory::new(512);
    let mut c = build(&two_way(16, 64, 0));

    // 0x00, 0x20 and 0x40 all map to set 0.
    let _ = c.read(&mut mem, 0x00, MemEntrySize::Word, 0).unwrap();
    let _ = c.read(&mut mem, 0x20, MemEntrySize::Word, 1).unwrap();
    let _ = c.read(&mut mem, 0x00, MemEntrySize::Word, 2).unwrap();
    let _ = c.read(&mut mem, 0x40, MemEntrySize::Word, 3).unwrap();

    assert!(c.probe(0x00));
    assert!(!c.probe(0x20));
    assert!(c.probe(0x40));
}

#[test]
fn direct_mapped_conflict_replaces_line() {
    let mut mem = MainMemory::new(512);
    let mut c = build(&cache(16, 64, 0));

    let _ = c.read(&mut mem, 0x00, MemEntrySize::Word, 0).unwrap();
    let _ = c.read(&mut mem, 0x40, MemEntrySize::Word, 1).unwrap();

    assert!(!c.probe(0x00));
    assert!(c.probe(0x40));
}

#[test]
fn dirty_victim_is_written_to_its_own_block() {
    let mut store = MockStore::new();
    store.expect_get_value().returning(|_, _| Ok(0));
    store
        .expect_set_value()
        .withf(|&addr, &value, &size| {
            let expected = match addr {
                0x34 => 0xab,
                0x35 => 0xcd,
                _ => 0,
            };
            (0x30..0x40).contains(&addr) && value == expected && size == MemEntrySize::Byte
        })
        .times(16)
        .returning(|_, _, _| Ok(()));

    // Two sets of 16 bytes: 0x30 is set 1, 0x50 evicts it.
    let mut c = build(&cache(16, 32, 0));
    let _ = c.write(&mut store, 0x34, 0xabcd, MemEntrySize::Half, 0).unwrap();
    assert!(c.is_dirty(0x30));

    let (_, outcome) = c.read(&mut store, 0x50, MemEntrySize::Word, 1).unwrap();
    assert_eq!(outcome, CacheOutcome::Miss);
    assert!(!c.probe(0x30));
}

#[test]
fn clean_victim_is_not_written_back() {
    let mut store = MockStore::zeroed();
    store.expect_set_value().never();

    let mut c = build(&cache(16, 32, 0));
    let _ = c.read(&mut store, 0x30, MemEntrySize::Word, 0).unwrap();
    let _ = c.read(&mut store, 0x50, MemEntrySize::Word, 1).unwrap();
}

#[test]
fn write_miss_stores_bytes_and_marks_dirty() {
    let mut mem = MainMemory::new(256);
    let mut c = build(&cache(16, 64, 10));

    let outcome = c
        .write(&mut mem, 0x20, 0x1122_3344, MemEntrySize::Word, 0)
        .unwrap();
    assert_eq!(outcome, CacheOutcome::Miss);
    assert!(c.is_dirty(0x20));
    // Memory is untouched until the line leaves the cache.
    assert_eq!(mem.get_value(0x20, MemEntrySize::Word).unwrap(), 0);

    let (value, _) = c.read(&mut mem, 0x20, MemEntrySize::Word, 10).unwrap();
    assert_eq!(value, 0x1122_3344);
}

#[test]
fn drain_writes_dirty_lines_once() {
    let mut mem = MainMemory::new(256);
    let mut c = build(&cache(16, 64, 0));
    let _ = c.write(&mut mem, 0x08, 0xcafe_f00d, MemEntrySize::Word, 0).unwrap();

    c.drain(&mut mem, 1).unwrap();
    assert_eq!(mem.get_value(0x08, MemEntrySize::Word).unwrap(), 0xcafe_f00d);
    assert!(c.probe(0x08));
    assert!(!c.is_dirty(0x08));

    let mut store = MockStore::zeroed();
    store.expect_set_value().never();
    c.drain(&mut store, 2).unwrap();
}

#[rstest]
#[case::block_not_power_of_two(cache(12, 96, 1))]
#[case::size_not_multiple(cache(16, 40, 1))]
#[case::sets_not_power_of_two(cache(16, 48, 1))]
#[case::zero_block(cache(0, 64, 1))]
#[case::two_way_too_small(two_way(16, 16, 1))]
fn malformed_geometry_is_rejected(#[case] config: CacheConfig) {
    assert!(matches!(
        Cache::new("icache", &config),
        Err(SimError::InvalidCacheConfig { cache: "icache", .. })
    ));
}

proptest! {
    #[test]
    fn reads_return_last_written_value(
        writes in proptest::collection::vec((0u32..0x100, any::<u32>()), 1..32),
        two_ways in any::<bool>(),
    ) {
        let config = if two_ways { two_way(8, 32, 0) } else { cache(8, 32, 0) };
        let mut c = build(&config);
        let mut mem = MainMemory::new(0x200);
        let mut model = vec![0u8; 0x200];

        for (cycle, &(slot, value)) in writes.iter().enumerate() {
            let addr = slot * 2;
            let _ = c.write(&mut mem, addr, value, MemEntrySize::Half, cycle as u64).unwrap();
            model[addr as usize] = (value >> 8) as u8;
            model[addr as usize + 1] = value as u8;
        }

        let base = writes.len() as u64;
        for (i, &(slot, _)) in writes.iter().enumerate() {
            let addr = slot * 2;
            let (got, _) = c.read(&mut mem, addr, MemEntrySize::Half, base + i as u64).unwrap();
            let expected = (u32::from(model[addr as usize]) << 8) | u32::from(model[addr as usize + 1]);
            prop_assert_eq!(got, expected);
        }

        c.drain(&mut mem, base * 2).unwrap();
        prop_assert_eq!(mem.as_bytes(), model.as_slice());
    }
}
