//! Instruction Decoder.
//!
//! Decoding is total: the opcode field is two bits wide and all four values
//! are defined, so every byte is some valid instruction.

use crate::isa::instruction::{
    DEST_SHIFT, FIELD_MASK, Instruction, InstructionBits, OPCODE_SHIFT, SRC1_SHIFT, SRC2_SHIFT,
};

/// Decodes an instruction byte into its fields.
///
/// # Arguments
///
/// * `raw` - The instruction byte fetched from memory.
pub fn decode(raw: u8) -> Instruction {
    Instruction {
        opcode: raw.opcode(),
        dest: raw.dest(),
        src1: raw.src1(),
        src2: raw.src2(),
    }
}

/// Packs an instruction back into its byte encoding.
///
/// `encode(&decode(b)) == b` for every byte `b`.
pub const fn encode(inst: &Instruction) -> u8 {
    (inst.opcode.bits() << OPCODE_SHIFT)
        | ((inst.dest & FIELD_MASK) << DEST_SHIFT)
        | ((inst.src1 & FIELD_MASK) << SRC1_SHIFT)
        | ((inst.src2 & FIELD_MASK) << SRC2_SHIFT)
}
