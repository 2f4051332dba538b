//! Assembly source parser.
//!
//! Translates line-oriented assembly into an [`AssembledProgram`]. The
//! emission address starts at zero, is moved by `.orig`, and advances by one
//! per instruction, wrapping from `0xff` to `0x00`.

use crate::asm::numeral::parse_numeral;
use crate::asm::program::AssembledProgram;
use crate::common::constants::{ORIGIN_DIRECTIVE, REGISTER_MARKER};
use crate::common::error::{AsmError, AsmErrorKind};
use crate::isa::disasm::assemble_line;
use crate::isa::instruction::{FIELD_MASK, Opcode};

/// Assembles a whole source text.
///
/// # Errors
///
/// Returns the first failing line as an [`AsmError`]; no partial program is returned.
pub fn assemble(source: &str) -> Result<AssembledProgram, AsmError> {
    let mut program = AssembledProgram::new();
    let mut address: u8 = 0;

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let at = |kind: AsmErrorKind| AsmError::new(idx + 1, kind);

        let (head, rest) = split_head(line);
        if head == ORIGIN_DIRECTIVE {
            address = parse_origin(rest).map_err(at)?;
            continue;
        }

        let byte = parse_instruction(line).map_err(at)?;
        program.push(address, byte);
        address = address.wrapping_add(1);
    }

    Ok(program)
}

/// Parses one instruction line, `<mnemonic> $<d>, $<s1>, $<s2>`, into its byte.
///
/// # Errors
///
/// * [`AsmErrorKind::UnknownMnemonic`] for a mnemonic outside the opcode table.
/// * [`AsmErrorKind::MalformedOperand`] unless there are exactly three `$`-prefixed
///   register numerals, each below 4.
pub fn parse_instruction(text: &str) -> Result<u8, AsmErrorKind> {
    let (mnemonic, rest) = split_head(text.trim());
    if Opcode::from_mnemonic(mnemonic).is_none() {
        return Err(AsmErrorKind::UnknownMnemonic(mnemonic.to_string()));
    }

    let operands: Vec<&str> = rest.split(',').map(str::trim).collect();
    let [dest, src1, src2] = operands.as_slice() else {
        return Err(AsmErrorKind::MalformedOperand(rest.to_string()));
    };

    assemble_line(
        mnemonic,
        parse_register(dest)?,
        parse_register(src1)?,
        parse_register(src2)?,
    )
}

/// Parses a memory address token.
///
/// # Errors
///
/// * [`AsmErrorKind::MalformedOperand`] if the token is not a numeral.
/// * [`AsmErrorKind::AddressOutOfRange`] if it does not fit in a byte.
pub fn parse_address(token: &str) -> Result<u8, AsmErrorKind> {
    let value =
        parse_numeral(token).ok_or_else(|| AsmErrorKind::MalformedOperand(token.to_string()))?;
    u8::try_from(value).map_err(|_| AsmErrorKind::AddressOutOfRange(value))
}

fn parse_origin(args: &str) -> Result<u8, AsmErrorKind> {
    let mut tokens = args.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => parse_address(token),
        _ => Err(AsmErrorKind::MalformedOperand(args.to_string())),
    }
}

fn parse_register(token: &str) -> Result<u8, AsmErrorKind> {
    let malformed = || AsmErrorKind::MalformedOperand(token.to_string());
    let digits = token.strip_prefix(REGISTER_MARKER).ok_or_else(malformed)?;
    match parse_numeral(digits) {
        Some(value) if value <= u32::from(FIELD_MASK) => Ok(value as u8),
        _ => Err(malformed()),
    }
}

/// Splits off the first whitespace-delimited word.
fn split_head(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()))
}
