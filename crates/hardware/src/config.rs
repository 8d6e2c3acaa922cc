//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory size, exception vector, cache geometry).
//! 2. **Structures:** General settings plus one configuration per cache.
//! 3. **Validation:** Conversion of a cache configuration into a checked geometry.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::{Deserialize, Serialize};

use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
///
/// These values apply whenever a field is missing from a JSON configuration.
mod defaults {
    /// Size of the flat memory store (64 KiB).
    pub const MEMORY_SIZE: usize = crate::common::constants::DEFAULT_MEMORY_SIZE;

    /// Address execution resumes at after a trap.
    pub const EXCEPTION_VECTOR: u32 = crate::common::constants::EXCEPTION_VECTOR;

    /// Default cache block size in bytes.
    pub const BLOCK_SIZE: u32 = 16;

    /// Default cache size in bytes (1 KiB).
    pub const CACHE_SIZE: u32 = 1024;

    /// Default miss latency in cycles.
    pub const MISS_LATENCY: u64 = 10;
}

/// Cache associativity.
///
/// Only direct-mapped and two-way set-associative caches are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Associativity {
    /// One way per set.
    #[default]
    #[serde(alias = "DirectMapped", alias = "direct", alias = "1")]
    DirectMapped,
    /// Two ways per set with true LRU replacement.
    #[serde(alias = "TwoWay", alias = "2")]
    TwoWay,
}

impl Associativity {
    /// Returns the number of ways per set.
    pub const fn ways(self) -> u32 {
        match self {
            Self::DirectMapped => 1,
            Self::TwoWay => 2,
        }
    }
}

/// Root configuration structure.
///
/// # Example JSON
///
/// ```
/// use mipsim_core::config::{Associativity, Config};
///
/// let json = r#"{
///     "general": { "exception_vector": 32768 },
///     "icache": { "block_size": 4, "cache_size": 16, "miss_latency": 10 },
///     "dcache": { "block_size": 16, "cache_size": 256, "miss_latency": 5,
///                 "associativity": "two_way" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.icache.geometry("icache").unwrap().num_sets, 4);
/// assert_eq!(config.dcache.associativity, Associativity::TwoWay);
/// assert_eq!(config.general.memory_size, 0x1_0000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction cache configuration
    #[serde(default)]
    pub icache: CacheConfig,
    /// Data cache configuration
    #[serde(default)]
    pub dcache: CacheConfig,
}

impl Config {
    /// Parses a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] when the text is not valid configuration JSON.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks both cache geometries against each other and the memory size.
    ///
    /// A fill always reads a whole block, so the memory size must be a whole
    /// number of blocks for each cache or an in-bounds access near the end
    /// of memory would fault.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheConfig`] for a malformed geometry or a
    /// memory size that is not a multiple of the cache's block size.
    pub fn validate(&self) -> SimResult<()> {
        for (cache, config) in [("icache", &self.icache), ("dcache", &self.dcache)] {
            let geometry = config.geometry(cache)?;
            if self.general.memory_size % geometry.block_size as usize != 0 {
                return Err(SimError::InvalidCacheConfig {
                    cache,
                    reason: format!(
                        "memory size {:#x} is not a multiple of the {} byte block size",
                        self.general.memory_size, geometry.block_size
                    ),
                });
            }
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Address the PC is redirected to on an illegal instruction or overflow
    #[serde(default = "GeneralConfig::default_exception_vector")]
    pub exception_vector: u32,

    /// Size of the flat memory store in bytes
    #[serde(default = "GeneralConfig::default_memory_size")]
    pub memory_size: usize,
}

impl GeneralConfig {
    /// Returns the default exception vector.
    const fn default_exception_vector() -> u32 {
        defaults::EXCEPTION_VECTOR
    }

    /// Returns the default memory size in bytes.
    const fn default_memory_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            exception_vector: defaults::EXCEPTION_VECTOR,
            memory_size: defaults::MEMORY_SIZE,
        }
    }
}

/// Individual cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Block (line) size in bytes; must be a power of two
    #[serde(default = "CacheConfig::default_block_size")]
    pub block_size: u32,

    /// Total cache size in bytes
    #[serde(default = "CacheConfig::default_cache_size")]
    pub cache_size: u32,

    /// Cycles between a miss and the block becoming usable
    #[serde(default = "CacheConfig::default_miss_latency")]
    pub miss_latency: u64,

    /// Direct-mapped or two-way set-associative
    #[serde(default)]
    pub associativity: Associativity,
}

impl CacheConfig {
    /// Returns the default block size in bytes.
    const fn default_block_size() -> u32 {
        defaults::BLOCK_SIZE
    }

    /// Returns the default cache size in bytes.
    const fn default_cache_size() -> u32 {
        defaults::CACHE_SIZE
    }

    /// Returns the default miss latency in cycles.
    const fn default_miss_latency() -> u64 {
        defaults::MISS_LATENCY
    }

    /// Validates this configuration and derives the cache geometry.
    ///
    /// # Arguments
    ///
    /// * `cache` - Name used in error messages ("icache" or "dcache").
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheConfig`] when the block size is not a power
    /// of two, the cache size is not a multiple of `block_size × ways`, or the
    /// resulting number of sets is not a power of two.
    pub fn geometry(&self, cache: &'static str) -> SimResult<CacheGeometry> {
        let invalid = |reason: String| SimError::InvalidCacheConfig { cache, reason };
        let ways = self.associativity.ways();

        if !self.block_size.is_power_of_two() {
            return Err(invalid(format!(
                "block size {} is not a power of two",
                self.block_size
            )));
        }
        let set_bytes = self.block_size.checked_mul(ways).unwrap_or(0);
        if set_bytes == 0 || self.cache_size == 0 || self.cache_size % set_bytes != 0 {
            return Err(invalid(format!(
                "cache size {} is not a multiple of {} ({} byte blocks x {} way(s))",
                self.cache_size, set_bytes, self.block_size, ways
            )));
        }
        let num_sets = self.cache_size / set_bytes;
        if !num_sets.is_power_of_two() {
            return Err(invalid(format!("{num_sets} sets is not a power of two")));
        }

        Ok(CacheGeometry {
            block_size: self.block_size,
            num_sets,
            ways,
            offset_bits: self.block_size.trailing_zeros(),
            index_bits: num_sets.trailing_zeros(),
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            block_size: defaults::BLOCK_SIZE,
            cache_size: defaults::CACHE_SIZE,
            miss_latency: defaults::MISS_LATENCY,
            associativity: Associativity::DirectMapped,
        }
    }
}

/// Validated cache geometry derived from a [`CacheConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    /// Block size in bytes.
    pub block_size: u32,
    /// Number of sets.
    pub num_sets: u32,
    /// Lines per set.
    pub ways: u32,
    /// log2(block size).
    pub offset_bits: u32,
    /// log2(number of sets).
    pub index_bits: u32,
}

impl CacheGeometry {
    /// Splits an address into `(tag, index, offset)`.
    ///
    /// Shifts go through `u64` so a 32-bit shift never overflows when the
    /// offset and index fields cover the whole address.
    #[inline]
    pub const fn split(&self, addr: u32) -> (u32, usize, u32) {
        let addr = addr as u64;
        let offset = addr & ((1 << self.offset_bits) - 1);
        let index = (addr >> self.offset_bits) & ((1 << self.index_bits) - 1);
        let tag = addr >> (self.offset_bits + self.index_bits);
        (tag as u32, index as usize, offset as u32)
    }

    /// Rebuilds the base address of the block holding `tag` in set `index`.
    #[inline]
    pub const fn block_addr(&self, tag: u32, index: usize) -> u32 {
        let addr = ((tag as u64) << (self.offset_bits + self.index_bits))
            | ((index as u64) << self.offset_bits);
        addr as u32
    }
}
