//! Instruction encoding structures and bit extraction utilities.
//!
//! Provides the fixed opcode table and field accessors for the
//! one-byte instruction format.

use std::fmt;

/// Bit shift of the opcode field (bits 6-7).
pub const OPCODE_SHIFT: u8 = 6;
/// Bit shift of the destination register field (bits 4-5).
pub const DEST_SHIFT: u8 = 4;
/// Bit shift of the first source register field (bits 2-3).
pub const SRC1_SHIFT: u8 = 2;
/// Bit shift of the second source register field (bits 0-1).
pub const SRC2_SHIFT: u8 = 0;
/// Mask applied to every 2-bit field after shifting.
pub const FIELD_MASK: u8 = 0b11;

/// ALU operation selected by the 2-bit opcode field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `dest = src1 + src2`, wrapping at 8 bits.
    Add = 0,
    /// `dest = src1 - src2`, wrapping at 8 bits.
    Sub = 1,
    /// `dest = src1 & src2`.
    And = 2,
    /// `dest = src1 | src2`.
    Or = 3,
}

impl Opcode {
    /// All opcodes in encoding order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::And, Self::Or];

    /// Maps a 2-bit field value to its opcode. Only the low two bits are used,
    /// so every input maps to a defined opcode.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & FIELD_MASK {
            0 => Self::Add,
            1 => Self::Sub,
            2 => Self::And,
            _ => Self::Or,
        }
    }

    /// The 2-bit encoding of this opcode.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// The assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Looks up a mnemonic (case-sensitive, exact match).
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Decoded view of one instruction byte.
///
/// Register fields are 2-bit selectors, always in `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The ALU operation.
    pub opcode: Opcode,
    /// Destination register index.
    pub dest: u8,
    /// First source register index.
    pub src1: u8,
    /// Second source register index.
    pub src2: u8,
}

impl Instruction {
    /// Builds an instruction, masking each register selector to two bits.
    pub const fn new(opcode: Opcode, dest: u8, src1: u8, src2: u8) -> Self {
        Self {
            opcode,
            dest: dest & FIELD_MASK,
            src1: src1 & FIELD_MASK,
            src2: src2 & FIELD_MASK,
        }
    }
}

/// Field extraction for raw instruction bytes.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 6-7).
    fn opcode(&self) -> Opcode;

    /// Extracts the destination register field (bits 4-5).
    fn dest(&self) -> u8;

    /// Extracts the first source register field (bits 2-3).
    fn src1(&self) -> u8;

    /// Extracts the second source register field (bits 0-1).
    fn src2(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn opcode(&self) -> Opcode {
        Opcode::from_bits(self >> OPCODE_SHIFT)
    }

    #[inline(always)]
    fn dest(&self) -> u8 {
        (self >> DEST_SHIFT) & FIELD_MASK
    }

    #[inline(always)]
    fn src1(&self) -> u8 {
        (self >> SRC1_SHIFT) & FIELD_MASK
    }

    #[inline(always)]
    fn src2(&self) -> u8 {
        (self >> SRC2_SHIFT) & FIELD_MASK
    }
}
