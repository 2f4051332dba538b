//! Operand Parsing Unit Tests.

use alusim_core::asm::{parse_address, parse_instruction};
use alusim_core::common::AsmErrorKind;
use alusim_core::isa::disassemble;
use rstest::rstest;

#[rstest]
#[case("0x1f", 0x1f)]
#[case("0X1F", 0x1f)]
#[case("0b1010", 10)]
#[case("0B11", 3)]
#[case("42", 42)]
#[case("255", 255)]
#[case("0", 0)]
#[case("0x0b1", 0xb1)]
#[case("0b0", 0)]
fn addresses(#[case] token: &str, #[case] expected: u8) {
    assert_eq!(parse_address(token), Ok(expected));
}

#[rstest]
#[case("-1")]
#[case("+1")]
#[case("0x")]
#[case("0b2")]
#[case("ten")]
#[case("")]
fn malformed_addresses(#[case] token: &str) {
    assert_eq!(
        parse_address(token),
        Err(AsmErrorKind::MalformedOperand(token.to_string()))
    );
}

#[test]
fn oversized_address() {
    assert_eq!(parse_address("300"), Err(AsmErrorKind::AddressOutOfRange(300)));
}

#[test]
fn register_numerals_accept_every_base() {
    assert_eq!(parse_instruction("or $0x3, $0b01, $2"), Ok(0b11_11_01_10));
}

#[test]
fn instruction_text_round_trips_through_disassembly() {
    for raw in 0..=u8::MAX {
        let listing = disassemble(raw);
        let (mnemonic, operands) = listing.split_once('\t').unwrap();
        let text = format!("{mnemonic} {}", operands.replace('r', "$"));
        assert_eq!(parse_instruction(&text), Ok(raw), "{text}");
    }
}
