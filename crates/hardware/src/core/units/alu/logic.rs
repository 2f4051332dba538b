//! ALU bitwise logical operations.

use crate::isa::instruction::Opcode;

/// Executes a logical operation. Returns `0` for non-logic opcodes.
pub const fn execute(op: Opcode, a: u8, b: u8) -> u8 {
    match op {
        Opcode::And => a & b,
        Opcode::Or => a | b,
        _ => 0,
    }
}
