//! Assembler Unit Tests.

use alusim_core::asm::assemble;
use alusim_core::common::{AsmError, AsmErrorKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn origin_sets_emission_address() {
    let program = assemble(".orig 0x02\nadd $1, $2, $3\nsub $0, $1, $1\n").unwrap();
    assert_eq!(program.pairs(), &[(0x02, 0x1B), (0x03, 0x45)]);
}

#[test]
fn emission_starts_at_zero_without_origin() {
    let program = assemble("and $3, $2, $1\nor $0, $0, $0").unwrap();
    assert_eq!(program.pairs(), &[(0, 0b10_11_10_01), (1, 0b11_00_00_00)]);
}

#[test]
fn blank_lines_and_indentation_are_ignored() {
    let program = assemble("\n   \n\t.orig 0b101\n\n    add $0, $1, $2   \n").unwrap();
    assert_eq!(program.pairs(), &[(5, 0b00_00_01_10)]);
}

#[test]
fn repeated_origins_may_overlap() {
    let program = assemble(".orig 9\nadd $1, $1, $1\n.orig 9\nsub $1, $1, $1\n").unwrap();
    assert_eq!(program.pairs(), &[(9, 0x15), (9, 0x55)]);
}

#[test]
fn emission_wraps_past_last_address() {
    let program = assemble(".orig 0xff\nadd $0, $0, $0\nadd $0, $0, $1\n").unwrap();
    assert_eq!(program.pairs(), &[(0xff, 0x00), (0x00, 0x01)]);
}

#[test]
fn empty_source_is_empty_program() {
    assert!(assemble("").unwrap().is_empty());
    assert!(assemble("\n\n").unwrap().is_empty());
}

#[test]
fn unknown_mnemonic_is_reported_with_line() {
    assert_eq!(
        assemble("xor $0, $1, $2"),
        Err(AsmError::new(1, AsmErrorKind::UnknownMnemonic("xor".into())))
    );
}

#[test]
fn first_bad_line_aborts_assembly() {
    let err = assemble("add $1, $2, $3\n\nmul $1, $2, $3\nfoo\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, AsmErrorKind::UnknownMnemonic("mul".into()));
    assert_eq!(err.to_string(), "line 3: unknown mnemonic 'mul'");
}

#[rstest]
#[case("ADD $1, $2, $3", AsmErrorKind::UnknownMnemonic("ADD".into()))]
#[case(".ORIG 4", AsmErrorKind::UnknownMnemonic(".ORIG".into()))]
#[case(".orig", AsmErrorKind::MalformedOperand(String::new()))]
#[case(".orig 1 2", AsmErrorKind::MalformedOperand("1 2".into()))]
#[case(".orig zz", AsmErrorKind::MalformedOperand("zz".into()))]
#[case(".orig 256", AsmErrorKind::AddressOutOfRange(256))]
#[case(".orig 0x100", AsmErrorKind::AddressOutOfRange(0x100))]
#[case("add $1, $2", AsmErrorKind::MalformedOperand("$1, $2".into()))]
#[case("add 1, 2, 3", AsmErrorKind::MalformedOperand("1".into()))]
#[case("add $1, $2, $4", AsmErrorKind::MalformedOperand("$4".into()))]
#[case("add $1,, $2", AsmErrorKind::MalformedOperand(String::new()))]
fn rejected_lines(#[case] source: &str, #[case] kind: AsmErrorKind) {
    assert_eq!(assemble(source), Err(AsmError::new(1, kind)));
}
