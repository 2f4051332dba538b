//! Instruction Disassembler.
//!
//! Converts an instruction byte into the text shown in the disassembly
//! panel, and packs a mnemonic plus register selectors back into a byte.
//!
//! ```
//! use alusim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b00_01_10_11), "add\tr1, r2, r3");
//! ```

use crate::common::error::AsmErrorKind;
use crate::isa::decode::{decode, encode};
use crate::isa::instruction::{FIELD_MASK, Instruction, Opcode};

/// Mnemonic table indexed by opcode value.
pub const MNEMONICS: [&str; 4] = [
    Opcode::Add.mnemonic(),
    Opcode::Sub.mnemonic(),
    Opcode::And.mnemonic(),
    Opcode::Or.mnemonic(),
];

/// Disassembles an instruction byte, e.g. `"sub\tr0, r1, r1"`.
pub fn disassemble(raw: u8) -> String {
    let inst = decode(raw);
    format!(
        "{}\tr{}, r{}, r{}",
        inst.opcode.mnemonic(),
        inst.dest,
        inst.src1,
        inst.src2
    )
}

/// Assembles one instruction from its mnemonic and register selectors.
///
/// # Errors
///
/// * [`AsmErrorKind::UnknownMnemonic`] when `mnemonic` is not in [`MNEMONICS`].
/// * [`AsmErrorKind::MalformedOperand`] when a selector does not fit in two bits.
pub fn assemble_line(mnemonic: &str, dest: u8, src1: u8, src2: u8) -> Result<u8, AsmErrorKind> {
    let opcode = Opcode::from_mnemonic(mnemonic)
        .ok_or_else(|| AsmErrorKind::UnknownMnemonic(mnemonic.to_string()))?;

    if let Some(bad) = [dest, src1, src2].into_iter().find(|r| *r > FIELD_MASK) {
        return Err(AsmErrorKind::MalformedOperand(format!("${bad}")));
    }

    Ok(encode(&Instruction::new(opcode, dest, src1, src2)))
}
