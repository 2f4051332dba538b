//! Instruction Set Architecture (ISA) Definitions.
//!
//! Every instruction is a single byte laid out as
//! `[opcode:2][dest:2][src1:2][src2:2]`, with opcodes
//! `0 = add`, `1 = sub`, `2 = and`, `3 = or`.

/// Byte decoding and encoding.
pub mod decode;

/// Disassembler and single-instruction assembly.
pub mod disasm;

/// Opcode table, decoded instruction view, and bit-field extraction.
pub mod instruction;

pub use decode::{decode, encode};
pub use disasm::{assemble_line, disassemble};
pub use instruction::{Instruction, InstructionBits, Opcode};
