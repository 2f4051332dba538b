//! Arithmetic Logic Unit (ALU).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (8-bit wraparound)
//! - [`logic`]:      And, Or

/// Wrapping 8-bit addition and subtraction.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

use crate::isa::instruction::Opcode;

/// Arithmetic Logic Unit for byte operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::core::units::alu::Alu;
    /// use alusim_core::isa::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 250, 10), 4);
    /// assert_eq!(Alu::execute(Opcode::Sub, 0, 1), 255);
    /// assert_eq!(Alu::execute(Opcode::And, 0b1100, 0b1010), 0b1000);
    /// assert_eq!(Alu::execute(Opcode::Or, 0b1100, 0b1010), 0b1110);
    /// ```
    pub const fn execute(op: Opcode, a: u8, b: u8) -> u8 {
        match op {
            Opcode::Add | Opcode::Sub => arithmetic::execute(op, a, b),
            Opcode::And | Opcode::Or => logic::execute(op, a, b),
        }
    }
}
