//! Instruction Disassembler for the MIPS-I integer subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics. Branch and jump
//! targets are printed as raw word offsets, not resolved addresses.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0022_1820), "add v1, at, v0");
//! assert_eq!(disassemble(0xfeed_feed), "halt");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::{ImmediateOpcode, JumpOpcode, Operation, RegisterFunct};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"addiu sp, sp, -8"`, `"nop"` for word 0, or
/// `"illegal 0x........"` for unrecognised encodings.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_owned();
    }
    let Ok(op) = decode(inst) else {
        return format!("illegal {inst:#010x}");
    };

    match op {
        Operation::Halt => "halt".to_owned(),

        // ── R-type ────────────────────────────────────────
        Operation::Register(r) => {
            let mn = match r.funct {
                RegisterFunct::Add => "add",
                RegisterFunct::Addu => "addu",
                RegisterFunct::And => "and",
                RegisterFunct::Nor => "nor",
                RegisterFunct::Or => "or",
                RegisterFunct::Slt => "slt",
                RegisterFunct::Sltu => "sltu",
                RegisterFunct::Sub => "sub",
                RegisterFunct::Subu => "subu",
                RegisterFunct::Jr => return format!("jr {}", reg_name(r.rs)),
                RegisterFunct::Sll | RegisterFunct::Srl => {
                    let mn = if r.funct == RegisterFunct::Sll { "sll" } else { "srl" };
                    return format!("{mn} {}, {}, {}", reg_name(r.rd), reg_name(r.rt), r.shamt);
                }
            };
            format!("{mn} {}, {}, {}", reg_name(r.rd), reg_name(r.rs), reg_name(r.rt))
        }

        // ── I-type ────────────────────────────────────────
        Operation::Immediate(i) => {
            let simm = i.se_imm as i32;
            let (rs, rt) = (reg_name(i.rs), reg_name(i.rt));
            match i.opcode {
                ImmediateOpcode::Addi => format!("addi {rt}, {rs}, {simm}"),
                ImmediateOpcode::Addiu => format!("addiu {rt}, {rs}, {simm}"),
                ImmediateOpcode::Slti => format!("slti {rt}, {rs}, {simm}"),
                ImmediateOpcode::Sltiu => format!("sltiu {rt}, {rs}, {simm}"),
                ImmediateOpcode::Andi => format!("andi {rt}, {rs}, {:#x}", i.ze_imm),
                ImmediateOpcode::Ori => format!("ori {rt}, {rs}, {:#x}", i.ze_imm),
                ImmediateOpcode::Lui => format!("lui {rt}, {:#x}", i.ze_imm),
                ImmediateOpcode::Beq => format!("beq {rs}, {rt}, {simm}"),
                ImmediateOpcode::Bne => format!("bne {rs}, {rt}, {simm}"),
                ImmediateOpcode::Blez => format!("blez {rs}, {simm}"),
                ImmediateOpcode::Bgtz => format!("bgtz {rs}, {simm}"),
                ImmediateOpcode::Lbu => format!("lbu {rt}, {simm}({rs})"),
                ImmediateOpcode::Lhu => format!("lhu {rt}, {simm}({rs})"),
                ImmediateOpcode::Lw => format!("lw {rt}, {simm}({rs})"),
                ImmediateOpcode::Ll => format!("ll {rt}, {simm}({rs})"),
                ImmediateOpcode::Sb => format!("sb {rt}, {simm}({rs})"),
                ImmediateOpcode::Sh => format!("sh {rt}, {simm}({rs})"),
                ImmediateOpcode::Sw => format!("sw {rt}, {simm}({rs})"),
                ImmediateOpcode::Sc => format!("sc {rt}, {simm}({rs})"),
            }
        }

        // ── J-type ────────────────────────────────────────
        Operation::Jump(j) => {
            let mn = match j.opcode {
                JumpOpcode::J => "j",
                JumpOpcode::Jal => "jal",
            };
            format!("{mn} {:#x}", j.target << 2)
        }
    }
}
