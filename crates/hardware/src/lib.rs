//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-accurate five-stage MIPS pipeline with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), forwarding and hazard stalls.
//! 2. **Memory:** Write-back instruction and data caches over a flat backing store.
//! 3. **ISA:** Decoding and disassembly of the supported MIPS-I integer subset.
//! 4. **Simulation:** Loader, configuration, reporting and statistics collection.
//!
//! # Examples
//!
//! ```
//! use mipsim_core::sim::loader::load_words;
//! use mipsim_core::{Config, MainMemory, Simulator};
//!
//! # fn main() -> Result<(), mipsim_core::common::SimError> {
//! let mut mem = MainMemory::new(0x1_0000);
//! // addiu $t0, $zero, 5; halt
//! load_words(&mut mem, &[0x2408_0005, 0xfeed_feed])?;
//!
//! let mut sim = Simulator::new(&Config::default(), mem)?;
//! sim.run_till_halt()?;
//! let done = sim.finalize()?;
//! assert_eq!(done.registers.get(8), 5);
//! # Ok(())
//! # }
//! ```

/// Common types and constants (registers, traps, errors, access sizes).
pub mod common;
/// Simulator configuration (general settings and cache geometries).
pub mod config;
/// CPU core (pipeline, ALU, caches).
pub mod core;
/// Instruction set (decode, instruction, ABI names, disassembly).
pub mod isa;
/// Simulator driver, loader and reporting.
pub mod sim;
/// Backing memory and the store trait.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, caches, memory and stats.
pub use crate::core::Cpu;
/// Top-level simulator.
pub use crate::sim::Simulator;
/// Flat backing memory.
pub use crate::soc::MainMemory;
