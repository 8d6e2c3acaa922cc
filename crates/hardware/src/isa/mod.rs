//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encodings, field extraction and decoding logic for the MIPS-I
//! integer subset executed by the pipeline.
//!
//! # Layout
//!
//! * `mips32`: Primary opcodes and SPECIAL function codes.
//! * `instruction`: Field extraction and the decoded `Operation` sum type.
//! * `decode`: Raw word to `Operation` translation.
//! * `disasm`: Mnemonic rendering for trace output.

/// ABI register name mappings.
pub mod abi;

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and decoded operation types.
pub mod instruction;

/// MIPS-I integer opcodes and function codes.
pub mod mips32;
