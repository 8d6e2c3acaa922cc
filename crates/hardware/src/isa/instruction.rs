//! Instruction encoding and decoded operation types.
//!
//! Provides bit extraction for MIPS instruction fields and the `Operation` sum
//! type produced by the decoder and consumed by every later pipeline stage.

use crate::common::constants::LINK_REG;
use crate::common::data::MemEntrySize;

/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1f;
/// Bit mask for the 6-bit opcode and function fields.
pub const OPCODE_MASK: u32 = 0x3f;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xffff;
/// Bit mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03ff_ffff;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 31-26).
    fn opcode(&self) -> u32;
    /// Extracts the first source register (bits 25-21).
    fn rs(&self) -> usize;
    /// Extracts the second source / I-type destination register (bits 20-16).
    fn rt(&self) -> usize;
    /// Extracts the R-type destination register (bits 15-11).
    fn rd(&self) -> usize;
    /// Extracts the shift amount (bits 10-6).
    fn shamt(&self) -> u32;
    /// Extracts the function code (bits 5-0).
    fn funct(&self) -> u32;
    /// Extracts the raw 16-bit immediate (bits 15-0).
    fn imm(&self) -> u16;
    /// Extracts the 26-bit jump target (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// R-type operations selected by the function code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterFunct {
    /// rd = rs + rt, trapping on signed overflow.
    Add,
    /// rd = rs + rt, wrapping.
    Addu,
    /// rd = rs & rt.
    And,
    /// pc = rs.
    Jr,
    /// rd = !(rs | rt).
    Nor,
    /// rd = rs | rt.
    Or,
    /// rd = (rs < rt) signed.
    Slt,
    /// rd = (rs < rt) unsigned.
    Sltu,
    /// rd = rt << shamt.
    Sll,
    /// rd = rt >> shamt, logical.
    Srl,
    /// rd = rs - rt, trapping on signed overflow.
    Sub,
    /// rd = rs - rt, wrapping.
    Subu,
}

/// A decoded R-type instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterOp {
    /// Operation selected by the function code.
    pub funct: RegisterFunct,
    /// First source register.
    pub rs: usize,
    /// Second source register.
    pub rt: usize,
    /// Destination register.
    pub rd: usize,
    /// Shift amount for SLL/SRL.
    pub shamt: u32,
}

/// I-type operations selected by the primary opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmediateOpcode {
    /// rt = rs + se(imm), trapping on signed overflow.
    Addi,
    /// rt = rs + se(imm), wrapping.
    Addiu,
    /// rt = rs & ze(imm).
    Andi,
    /// Branch if rs == rt.
    Beq,
    /// Branch if rs != rt.
    Bne,
    /// Branch if rs <= 0 (signed).
    Blez,
    /// Branch if rs > 0 (signed).
    Bgtz,
    /// rt = ze(mem8[rs + se(imm)]).
    Lbu,
    /// rt = ze(mem16[rs + se(imm)]).
    Lhu,
    /// rt = mem32[rs + se(imm)], opening a reservation.
    Ll,
    /// rt = imm << 16.
    Lui,
    /// rt = mem32[rs + se(imm)].
    Lw,
    /// rt = rs | ze(imm).
    Ori,
    /// rt = (rs < se(imm)) signed.
    Slti,
    /// rt = (rs < se(imm)) unsigned.
    Sltiu,
    /// mem8[rs + se(imm)] = rt.
    Sb,
    /// mem32[rs + se(imm)] = rt; rt = 1.
    Sc,
    /// mem16[rs + se(imm)] = rt.
    Sh,
    /// mem32[rs + se(imm)] = rt.
    Sw,
}

impl ImmediateOpcode {
    /// Returns `true` for the conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne | Self::Blez | Self::Bgtz)
    }

    /// Returns `true` for instructions that read memory in the MEM stage.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Lbu | Self::Lhu | Self::Lw | Self::Ll)
    }

    /// Returns `true` for instructions that write memory in the MEM stage.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Sb | Self::Sh | Self::Sw | Self::Sc)
    }

    /// Returns the access width for loads and stores.
    pub const fn mem_size(self) -> Option<MemEntrySize> {
        match self {
            Self::Lbu | Self::Sb => Some(MemEntrySize::Byte),
            Self::Lhu | Self::Sh => Some(MemEntrySize::Half),
            Self::Lw | Self::Ll | Self::Sw | Self::Sc => Some(MemEntrySize::Word),
            _ => None,
        }
    }
}

/// A decoded I-type instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImmediateOp {
    /// Operation selected by the opcode.
    pub opcode: ImmediateOpcode,
    /// Base / first source register.
    pub rs: usize,
    /// Destination, store data or second branch operand register.
    pub rt: usize,
    /// Raw 16-bit immediate.
    pub imm: u16,
    /// Immediate sign-extended to 32 bits.
    pub se_imm: u32,
    /// Immediate zero-extended to 32 bits.
    pub ze_imm: u32,
}

impl ImmediateOp {
    /// Builds an I-type operation from its fields, deriving both extensions.
    pub const fn new(opcode: ImmediateOpcode, rs: usize, rt: usize, imm: u16) -> Self {
        Self {
            opcode,
            rs,
            rt,
            imm,
            se_imm: imm as i16 as i32 as u32,
            ze_imm: imm as u32,
        }
    }

    /// Returns the taken-branch target for a branch fetched at `pc`.
    pub const fn branch_target(&self, pc: u32) -> u32 {
        pc.wrapping_add(4).wrapping_add(self.se_imm << 2)
    }
}

/// J-type operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOpcode {
    /// Unconditional jump.
    J,
    /// Jump and link: $ra = pc + 8.
    Jal,
}

/// A decoded J-type instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpOp {
    /// Operation selected by the opcode.
    pub opcode: JumpOpcode,
    /// 26-bit word target.
    pub target: u32,
}

impl JumpOp {
    /// Returns the jump destination for a jump fetched at `pc`.
    pub const fn destination(&self, pc: u32) -> u32 {
        (pc.wrapping_add(4) & crate::common::constants::JUMP_REGION_MASK) | (self.target << 2)
    }
}

/// A fully decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// R-type instruction (opcode 0).
    Register(RegisterOp),
    /// I-type instruction.
    Immediate(ImmediateOp),
    /// J-type instruction.
    Jump(JumpOp),
    /// The halt sentinel.
    Halt,
}

/// The bubble: `sll $zero, $zero, 0`, encoded as word 0.
pub const NOP: Operation = Operation::Register(RegisterOp {
    funct: RegisterFunct::Sll,
    rs: 0,
    rt: 0,
    rd: 0,
    shamt: 0,
});

impl Default for Operation {
    fn default() -> Self {
        NOP
    }
}

impl Operation {
    /// Returns the registers this operation reads.
    ///
    /// Stores (and SC) read their data register as well as the base register.
    pub const fn sources(&self) -> [Option<usize>; 2] {
        match self {
            Self::Register(r) => match r.funct {
                RegisterFunct::Jr => [Some(r.rs), None],
                RegisterFunct::Sll | RegisterFunct::Srl => [Some(r.rt), None],
                _ => [Some(r.rs), Some(r.rt)],
            },
            Self::Immediate(i) => match i.opcode {
                ImmediateOpcode::Beq
                | ImmediateOpcode::Bne
                | ImmediateOpcode::Sb
                | ImmediateOpcode::Sh
                | ImmediateOpcode::Sw
                | ImmediateOpcode::Sc => [Some(i.rs), Some(i.rt)],
                ImmediateOpcode::Lui => [None, None],
                _ => [Some(i.rs), None],
            },
            Self::Jump(_) | Self::Halt => [None, None],
        }
    }

    /// Returns `true` if `reg` is a non-zero register read by this operation.
    pub fn reads(&self, reg: usize) -> bool {
        reg != 0 && self.sources().contains(&Some(reg))
    }

    /// Returns the register this operation writes, if any.
    pub const fn dest(&self) -> Option<usize> {
        match self {
            Self::Register(r) => match r.funct {
                RegisterFunct::Jr => None,
                _ => Some(r.rd),
            },
            Self::Immediate(i) => match i.opcode {
                ImmediateOpcode::Beq
                | ImmediateOpcode::Bne
                | ImmediateOpcode::Blez
                | ImmediateOpcode::Bgtz
                | ImmediateOpcode::Sb
                | ImmediateOpcode::Sh
                | ImmediateOpcode::Sw => None,
                _ => Some(i.rt),
            },
            Self::Jump(j) => match j.opcode {
                JumpOpcode::Jal => Some(LINK_REG),
                JumpOpcode::J => None,
            },
            Self::Halt => None,
        }
    }

    /// Returns `true` for LBU, LHU, LW and LL.
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Immediate(i) if i.opcode.is_load())
    }

    /// Returns `true` for SB, SH, SW and SC.
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Immediate(i) if i.opcode.is_store())
    }

    /// Returns `true` for instructions resolved in decode (branches and JR).
    pub const fn is_branch(&self) -> bool {
        match self {
            Self::Immediate(i) => i.opcode.is_branch(),
            Self::Register(r) => matches!(r.funct, RegisterFunct::Jr),
            _ => false,
        }
    }

    /// Returns the memory access width for loads and stores.
    pub const fn mem_size(&self) -> Option<MemEntrySize> {
        match self {
            Self::Immediate(i) => i.opcode.mem_size(),
            _ => None,
        }
    }

    /// Returns `true` for the halt sentinel.
    pub const fn is_halt(&self) -> bool {
        matches!(self, Self::Halt)
    }
}
