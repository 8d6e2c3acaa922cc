//! Set-Associative Cache Model.
//!
//! This module implements the write-back, write-allocate cache used for both the
//! instruction and the data side. It provides:
//! 1. **Storage:** Real block contents, so data flows through the cache rather than
//!    around it, and dirty lines reach memory only on eviction or drain.
//! 2. **Latency:** A per-line "ready at" cycle; a line filled at cycle `c` answers
//!    hits only from cycle `c + miss_latency` on.
//! 3. **Accounting:** Hit and miss counters driven by the first byte of each access.
//!
//! The backing [`MemoryStore`] is passed into each call; the cache keeps no
//! reference to it.

/// Cache replacement policy implementations.
pub mod policies;

use tracing::trace;

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::data::MemEntrySize;
use crate::common::error::{MemoryError, SimError, SimResult};
use crate::config::{CacheConfig, CacheGeometry};
use crate::soc::traits::MemoryStore;

/// Outcome of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The line was resident and ready.
    Hit,
    /// The line was absent (and has now been filled) or is still being filled.
    Miss,
}

impl CacheOutcome {
    /// Returns `true` for [`CacheOutcome::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Cache line: metadata plus block contents.
#[derive(Clone, Debug, Default)]
struct CacheLine {
    tag: u32,
    valid: bool,
    dirty: bool,
    ready_at: u64,
    data: Vec<u8>,
}

/// Write-back, write-allocate set-associative cache.
#[derive(Debug)]
pub struct Cache {
    name: &'static str,
    geometry: CacheGeometry,
    miss_latency: u64,
    /// Lines indexed `set * ways + way`.
    lines: Vec<CacheLine>,
    policy: Box<dyn ReplacementPolicy>,
    hits: u64,
    misses: u64,
}

impl Cache {
    /// Creates an empty cache from a configuration.
    ///
    /// # Arguments
    ///
    /// * `name` - Label used in errors and trace output ("icache" or "dcache").
    /// * `config` - Geometry, miss latency and associativity.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheConfig`] if the configuration does not
    /// describe a valid geometry.
    pub fn new(name: &'static str, config: &CacheConfig) -> SimResult<Self> {
        let geometry = config.geometry(name)?;
        let sets = geometry.num_sets as usize;
        let ways = geometry.ways as usize;
        let line = CacheLine {
            data: vec![0; geometry.block_size as usize],
            ..CacheLine::default()
        };
        Ok(Self {
            name,
            geometry,
            miss_latency: config.miss_latency,
            lines: vec![line; sets * ways],
            policy: Box::new(LruPolicy::new(sets, ways)),
            hits: 0,
            misses: 0,
        })
    }

    /// Returns the configured miss latency in cycles.
    pub const fn miss_latency(&self) -> u64 {
        self.miss_latency
    }

    /// Returns the number of accesses whose first byte hit.
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns the number of accesses whose first byte missed.
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Reads `size` bytes at `addr`, assembled big-endian.
    ///
    /// Each byte is resolved independently; the returned outcome and the
    /// hit/miss counters follow the first byte only. On a miss the value is
    /// still assembled from the freshly filled block, but callers must retry
    /// once the miss latency has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Memory`] if a fill or write-back fails.
    pub fn read<M: MemoryStore + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
        size: MemEntrySize,
        cycle: u64,
    ) -> SimResult<(u32, CacheOutcome)> {
        let mut value = 0;
        let mut outcome = CacheOutcome::Hit;
        for i in 0..size.bytes() {
            let (idx, offset, byte_outcome) = self.lookup(mem, addr.wrapping_add(i), cycle)?;
            if i == 0 {
                outcome = byte_outcome;
            }
            value = (value << 8) | u32::from(self.lines[idx].data[offset]);
        }
        self.count(outcome);
        trace!(cache = self.name, addr = format_args!("{addr:#010x}"), ?outcome, cycle, "read");
        Ok((value, outcome))
    }

    /// Writes the low `size` bytes of `value` at `addr`, big-endian.
    ///
    /// The bytes land in the line whether or not it is ready yet, so a store
    /// replayed after a miss stall writes the same bytes again. Every touched
    /// line is marked dirty.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Memory`] if a fill or write-back fails.
    pub fn write<M: MemoryStore + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
        value: u32,
        size: MemEntrySize,
        cycle: u64,
    ) -> SimResult<CacheOutcome> {
        let width = size.bytes();
        let mut outcome = CacheOutcome::Hit;
        for i in 0..width {
            let (idx, offset, byte_outcome) = self.lookup(mem, addr.wrapping_add(i), cycle)?;
            if i == 0 {
                outcome = byte_outcome;
            }
            let shift = (width - 1 - i) * 8;
            let line = &mut self.lines[idx];
            line.data[offset] = (value >> shift) as u8;
            line.dirty = true;
        }
        self.count(outcome);
        trace!(cache = self.name, addr = format_args!("{addr:#010x}"), ?outcome, cycle, "write");
        Ok(outcome)
    }

    /// Writes every dirty line back to memory and clears its dirty flag.
    ///
    /// Lines stay valid. A second drain writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Memory`] if a write-back fails.
    pub fn drain<M: MemoryStore + ?Sized>(&mut self, mem: &mut M, cycle: u64) -> SimResult<()> {
        let ways = self.geometry.ways as usize;
        for idx in 0..self.lines.len() {
            if self.lines[idx].valid && self.lines[idx].dirty {
                self.write_back(mem, idx / ways, idx, cycle)?;
                self.lines[idx].dirty = false;
            }
        }
        Ok(())
    }

    /// Returns `true` if a valid line holds `addr`. Does not touch recency or counters.
    pub fn probe(&self, addr: u32) -> bool {
        let (tag, set, _) = self.geometry.split(addr);
        self.set_range(set)
            .any(|idx| self.lines[idx].valid && self.lines[idx].tag == tag)
    }

    /// Returns `true` if a valid line holding `addr` has unwritten changes.
    pub fn is_dirty(&self, addr: u32) -> bool {
        let (tag, set, _) = self.geometry.split(addr);
        self.set_range(set).any(|idx| {
            let line = &self.lines[idx];
            line.valid && line.tag == tag && line.dirty
        })
    }

    /// Single place where fill latency is compared against the current cycle.
    #[inline]
    const fn is_ready(ready_at: u64, cycle: u64) -> bool {
        ready_at <= cycle
    }

    fn count(&mut self, outcome: CacheOutcome) {
        match outcome {
            CacheOutcome::Hit => self.hits += 1,
            CacheOutcome::Miss => self.misses += 1,
        }
    }

    fn set_range(&self, set: usize) -> std::ops::Range<usize> {
        let ways = self.geometry.ways as usize;
        set * ways..(set + 1) * ways
    }

    /// Resolves one byte, running the miss procedure if its block is absent.
    ///
    /// Returns the line index, the byte offset within the block, and the outcome.
    fn lookup<M: MemoryStore + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
        cycle: u64,
    ) -> SimResult<(usize, usize, CacheOutcome)> {
        let (tag, set, offset) = self.geometry.split(addr);
        let offset = offset as usize;
        let ways = self.geometry.ways as usize;

        let mut matches = self
            .set_range(set)
            .filter(|&idx| self.lines[idx].valid && self.lines[idx].tag == tag);
        let found = matches.next();
        assert!(
            matches.next().is_none(),
            "{}: tag {tag:#x} held by more than one way of set {set}",
            self.name
        );

        if let Some(idx) = found {
            if Self::is_ready(self.lines[idx].ready_at, cycle) {
                self.policy.update(set, idx - set * ways);
                return Ok((idx, offset, CacheOutcome::Hit));
            }
            return Ok((idx, offset, CacheOutcome::Miss));
        }

        let idx = self.fill(mem, addr, tag, set, cycle)?;
        Ok((idx, offset, CacheOutcome::Miss))
    }

    /// Miss procedure: choose a victim, write it back if dirty, refill it.
    ///
    /// A failed refill is reported at `addr`, the byte that was asked for.
    fn fill<M: MemoryStore + ?Sized>(
        &mut self,
        mem: &mut M,
        addr: u32,
        tag: u32,
        set: usize,
        cycle: u64,
    ) -> SimResult<usize> {
        let ways = self.geometry.ways as usize;
        let base = set * ways;
        let way = match self.set_range(set).position(|idx| !self.lines[idx].valid) {
            Some(way) => way,
            None => self.policy.get_victim(set),
        };
        let idx = base + way;

        if self.lines[idx].valid && self.lines[idx].dirty {
            self.write_back(mem, set, idx, cycle)?;
        }

        let block_addr = addr & !(self.geometry.block_size - 1);
        let line = &mut self.lines[idx];
        for (i, byte) in line.data.iter_mut().enumerate() {
            *byte = mem
                .get_value(block_addr.wrapping_add(i as u32), MemEntrySize::Byte)
                .map_err(|_| SimError::Memory {
                    cycle,
                    source: MemoryError::OutOfBounds { addr, size: 1 },
                })? as u8;
        }
        line.tag = tag;
        line.valid = true;
        line.dirty = false;
        line.ready_at = cycle + self.miss_latency;
        self.policy.update(set, way);

        trace!(
            cache = self.name,
            block = format_args!("{block_addr:#010x}"),
            set,
            way,
            ready_at = line.ready_at,
            "fill"
        );
        Ok(idx)
    }

    fn write_back<M: MemoryStore + ?Sized>(
        &self,
        mem: &mut M,
        set: usize,
        idx: usize,
        cycle: u64,
    ) -> SimResult<()> {
        let line = &self.lines[idx];
        let base = self.geometry.block_addr(line.tag, set);
        for (i, &byte) in line.data.iter().enumerate() {
            mem.set_value(base.wrapping_add(i as u32), u32::from(byte), MemEntrySize::Byte)
                .map_err(|source| SimError::Memory { cycle, source })?;
        }
        trace!(cache = self.name, block = format_args!("{base:#010x}"), "write-back");
        Ok(())
    }
}
