//! Assembler for the text mnemonic format.
//!
//! # Syntax
//!
//! ```text
//! .orig 0x10
//! add $1, $2, $3
//! sub $0, $1, $1
//! ```
//!
//! - `.orig <addr>` sets the emission address (`0x`/`0X` hex, `0b`/`0B` binary, or decimal)
//! - Instruction lines are `<mnemonic> $<dest>, $<src1>, $<src2>`
//! - Mnemonics are `add`, `sub`, `and`, `or` (case-sensitive)
//! - Blank lines are skipped
//!
//! Assembly stops at the first bad line and returns no output.

/// Source-to-bytes translation.
pub mod assembler;

/// Numeral parsing shared by addresses and register operands.
pub mod numeral;

/// Assembler output.
pub mod program;

pub use assembler::{assemble, parse_address, parse_instruction};
pub use program::AssembledProgram;
