//! ALU Unit Tests.

use alusim_core::core::units::alu::Alu;
use alusim_core::isa::Opcode;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(Opcode::Add, 250, 10, 4)]
#[case(Opcode::Add, 7, 5, 12)]
#[case(Opcode::Sub, 0, 1, 255)]
#[case(Opcode::Sub, 12, 5, 7)]
#[case(Opcode::And, 0xF0, 0x3C, 0x30)]
#[case(Opcode::Or, 0xF0, 0x0F, 0xFF)]
fn known_results(#[case] op: Opcode, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

proptest! {
    #[test]
    fn add_is_modulo_256(a: u8, b: u8) {
        prop_assert_eq!(Alu::execute(Opcode::Add, a, b), ((u16::from(a) + u16::from(b)) % 256) as u8);
    }

    #[test]
    fn sub_is_modulo_256(a: u8, b: u8) {
        prop_assert_eq!(Alu::execute(Opcode::Sub, a, b), ((256 + u16::from(a) - u16::from(b)) % 256) as u8);
    }

    #[test]
    fn sub_undoes_add(a: u8, b: u8) {
        let sum = Alu::execute(Opcode::Add, a, b);
        prop_assert_eq!(Alu::execute(Opcode::Sub, sum, b), a);
    }

    #[test]
    fn logic_ops_are_bitwise(a: u8, b: u8) {
        prop_assert_eq!(Alu::execute(Opcode::And, a, b), a & b);
        prop_assert_eq!(Alu::execute(Opcode::Or, a, b), a | b);
    }
}
