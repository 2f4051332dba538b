//! Execution Engine Unit Tests.
//!
//! Verifies the effect of a single step, the program counter boundary at the
//! last address, and the Running-to-Idle transition at the end of memory.

use alusim_core::Cpu;
use alusim_core::common::LAST_ADDRESS;
use alusim_core::core::EngineState;
use alusim_core::core::units::alu::Alu;
use alusim_core::isa::{Instruction, Opcode, encode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::harness::{cpu_with_program, cpu_with_registers, init_logging, step_n};

const SUM_PROGRAM: &str = "\
.orig 0x02
add $1, $2, $3
sub $0, $1, $1
";

#[test]
fn assembled_program_runs_from_reset() {
    init_logging();
    let mut cpu = cpu_with_program(SUM_PROGRAM, &[(2, 7), (3, 5)]);
    assert_eq!(cpu.read_memory(2), 0x1B);
    assert_eq!(cpu.read_memory(3), 0x45);

    // Addresses 0 and 1 hold zero, which decodes to `add $0, $0, $0`.
    step_n(&mut cpu, 4);

    assert_eq!(cpu.registers(), &[0, 12, 7, 5]);
    assert_eq!(cpu.pc(), 4);
    assert_eq!(cpu.history().len(), 4);
}

#[test]
fn step_reports_what_it_did() {
    let mut cpu = cpu_with_registers(&[(2, 200), (3, 100)]);
    let raw = encode(&Instruction::new(Opcode::Add, 1, 2, 3));
    cpu.write_byte(0, raw).unwrap();

    let info = cpu.step();

    assert_eq!(info.pc, 0);
    assert_eq!(info.raw, raw);
    assert_eq!(info.instruction.opcode, Opcode::Add);
    assert_eq!(info.result, 44);
    assert!(!info.at_end);
    assert_eq!(cpu.pc(), 1);
}

#[test]
fn step_records_pre_image() {
    let mut cpu = cpu_with_registers(&[(1, 99), (2, 3), (3, 4)]);
    cpu.write_byte(0x10, encode(&Instruction::new(Opcode::Or, 1, 2, 3)))
        .unwrap();
    step_n(&mut cpu, 0x10);
    let before = cpu.history().len();

    let _ = cpu.step();

    let entry = *cpu.history().last().unwrap();
    assert_eq!(cpu.history().len(), before + 1);
    assert_eq!(entry.pc, 0x10);
    assert_eq!(entry.register_index, 1);
    assert_eq!(entry.previous_register_value, 99);
    assert_eq!(entry.memory, None);
    assert_eq!(cpu.register(1), Ok(7));
}

#[test]
fn destination_may_alias_a_source() {
    let mut cpu = cpu_with_registers(&[(1, 6)]);
    cpu.write_byte(0, encode(&Instruction::new(Opcode::Sub, 1, 1, 1)))
        .unwrap();
    let _ = cpu.step();
    assert_eq!(cpu.register(1), Ok(0));
    assert_eq!(cpu.history().last().unwrap().previous_register_value, 6);
}

#[test]
fn pc_holds_at_last_address() {
    let mut cpu = Cpu::default();
    step_n(&mut cpu, usize::from(LAST_ADDRESS));
    assert_eq!(cpu.pc(), LAST_ADDRESS);

    let info = cpu.step();
    assert!(info.at_end);
    assert_eq!(info.pc, LAST_ADDRESS);
    assert_eq!(cpu.pc(), LAST_ADDRESS);

    // Stepping again re-executes the last cell.
    let _ = cpu.step();
    assert_eq!(cpu.pc(), LAST_ADDRESS);
    assert_eq!(cpu.history().len(), 257);
}

#[test]
fn end_of_memory_stops_a_run() {
    let mut cpu = Cpu::default();
    step_n(&mut cpu, usize::from(LAST_ADDRESS));
    cpu.set_running(true);
    assert_eq!(cpu.state(), EngineState::Running);

    let info = cpu.step();

    assert!(info.at_end);
    assert_eq!(cpu.state(), EngineState::Idle);
    assert!(!cpu.snapshot().running);
}

#[test]
fn step_while_running_stays_running_before_the_end() {
    let mut cpu = Cpu::default();
    cpu.set_running(true);
    let _ = cpu.step();
    assert!(cpu.is_running());
    assert_eq!(cpu.pc(), 1);
}

#[test]
fn snapshot_copies_state() {
    let mut cpu = cpu_with_program(SUM_PROGRAM, &[(2, 1)]);
    let _ = cpu.step();
    let snap = cpu.snapshot();
    assert_eq!(snap.registers, cpu.registers().to_vec());
    assert_eq!(snap.memory.len(), 256);
    assert_eq!(snap.memory[2], 0x1B);
    assert_eq!(snap.pc, 1);
    assert!(!snap.running);
}

proptest! {
    #[test]
    fn step_applies_opcode(op in 0u8..4, a in any::<u8>(), b in any::<u8>()) {
        let opcode = Opcode::from_bits(op);
        let mut cpu = cpu_with_registers(&[(2, a), (3, b)]);
        cpu.write_byte(0, encode(&Instruction::new(opcode, 1, 2, 3))).unwrap();

        let _ = cpu.step();

        prop_assert_eq!(cpu.register(1).unwrap(), Alu::execute(opcode, a, b));
        prop_assert_eq!(cpu.register(2).unwrap(), a);
        prop_assert_eq!(cpu.register(3).unwrap(), b);
        prop_assert_eq!(cpu.pc(), 1);
    }
}
