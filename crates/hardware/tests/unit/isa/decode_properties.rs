//! Instruction Decode Properties.
//!
//! Decoding is total over all 256 bytes and `encode` is its exact inverse.

use alusim_core::isa::instruction::{Instruction, InstructionBits, Opcode};
use alusim_core::isa::{decode, encode};
use proptest::prelude::*;

#[test]
fn encode_inverts_decode_for_every_byte() {
    for b in 0..=u8::MAX {
        assert_eq!(encode(&decode(b)), b, "round trip failed for {b:#010b}");
    }
}

#[test]
fn opcode_field_selects_all_four_operations() {
    assert_eq!(decode(0b00_00_00_00).opcode, Opcode::Add);
    assert_eq!(decode(0b01_00_00_00).opcode, Opcode::Sub);
    assert_eq!(decode(0b10_00_00_00).opcode, Opcode::And);
    assert_eq!(decode(0b11_00_00_00).opcode, Opcode::Or);
}

#[test]
fn register_fields_are_two_bits_each() {
    let raw: u8 = 0b00_11_01_10;
    assert_eq!(raw.dest(), 3);
    assert_eq!(raw.src1(), 1);
    assert_eq!(raw.src2(), 2);
    assert_eq!(raw.opcode(), Opcode::Add);
}

#[test]
fn decoded_selectors_are_always_in_range() {
    for b in 0..=u8::MAX {
        let inst = decode(b);
        assert!(inst.dest < 4 && inst.src1 < 4 && inst.src2 < 4);
    }
}

#[test]
fn instruction_new_masks_selectors() {
    let inst = Instruction::new(Opcode::Or, 7, 5, 4);
    assert_eq!((inst.dest, inst.src1, inst.src2), (3, 1, 0));
}

proptest! {
    #[test]
    fn decode_inverts_encode(op in 0u8..4, d in 0u8..4, s1 in 0u8..4, s2 in 0u8..4) {
        let inst = Instruction::new(Opcode::from_bits(op), d, s1, s2);
        prop_assert_eq!(decode(encode(&inst)), inst);
    }
}
