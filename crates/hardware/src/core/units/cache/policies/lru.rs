//! Least Recently Used (LRU) Replacement Policy.
//!
//! Every access stamps the touched way with the value of a per-cache monotonic
//! clock. The victim is the way with the smallest stamp, which makes this a
//! true LRU rather than a tree approximation.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(1)
//!   - `get_victim()`: O(W) where W is the number of ways (associativity)
//! - **Space Complexity:** O(S × W) where S is the number of sets

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Last-use stamp per line, indexed `set * ways + way`.
    stamps: Vec<u64>,
    ways: usize,
    /// Monotonic access clock; starts at 1 so a stamp of 0 means "never used".
    clock: u64,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            stamps: vec![0; sets * ways],
            ways,
            clock: 1,
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Marks `way` as most recently used.
    fn update(&mut self, set: usize, way: usize) {
        self.stamps[set * self.ways + way] = self.clock;
        self.clock += 1;
    }

    /// Returns the way with the oldest stamp.
    ///
    /// # Panics
    ///
    /// Panics if two ways share the oldest stamp. The cache only asks for a
    /// victim once every way has been filled, and each fill takes a fresh stamp.
    fn get_victim(&mut self, set: usize) -> usize {
        let base = set * self.ways;
        let stamps = &self.stamps[base..base + self.ways];
        let mut victim = 0;
        for (way, &stamp) in stamps.iter().enumerate().skip(1) {
            if stamp < stamps[victim] {
                victim = way;
            }
        }
        assert!(
            stamps
                .iter()
                .enumerate()
                .all(|(way, &stamp)| way == victim || stamp != stamps[victim]),
            "LRU tie in set {set}: {stamps:?}"
        );
        victim
    }
}
