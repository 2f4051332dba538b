//! ALU arithmetic operations.
//!
//! Results wrap modulo 256; there are no flags.

use crate::isa::instruction::Opcode;

/// Executes an arithmetic operation. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: Opcode, a: u8, b: u8) -> u8 {
    match op {
        Opcode::Add => a.wrapping_add(b),
        Opcode::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
