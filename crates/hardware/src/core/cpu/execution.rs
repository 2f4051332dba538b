//! Execution Engine.
//!
//! This module implements the fetch/decode/execute cycle. It performs the following:
//! 1. **Step:** Executes the instruction at `pc`, records its pre-image, and advances `pc`.
//! 2. **Undo:** Reverts the newest step, or drains the whole history on reset.
//! 3. **Run State:** Tracks the Idle/Running transition, including the stop at the end of memory.
//!
//! None of these operations can fail; boundary conditions (pc at the last
//! address, empty history) are reported through return values.

use tracing::{debug, info, warn};

use super::Cpu;
use super::history::HistoryEntry;
use crate::common::constants::LAST_ADDRESS;
use crate::core::cpu::EngineState;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;

/// What one call to [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// Address the instruction was fetched from.
    pub pc: u8,
    /// Raw instruction byte.
    pub raw: u8,
    /// Decoded instruction.
    pub instruction: Instruction,
    /// Register actually written, after clamping the destination selector
    /// to the configured register count.
    pub register_index: usize,
    /// Value written to the destination register.
    pub result: u8,
    /// `true` when `pc` was already at the last address and did not advance.
    pub at_end: bool,
}

impl Cpu {
    /// Executes the instruction at the program counter.
    ///
    /// Computes `dest = src1 OP src2`, pushes the destination's prior value
    /// onto the history, then advances `pc`. At the last address `pc` holds,
    /// and a running engine drops back to idle.
    pub fn step(&mut self) -> StepInfo {
        let pc = self.pc;
        let raw = self.mem.read(pc);
        let inst = decode(raw);

        let a = self.regs.read_selector(inst.src1);
        let b = self.regs.read_selector(inst.src2);
        let previous = self.regs.read_selector(inst.dest);
        let result = Alu::execute(inst.opcode, a, b);
        let register_index = self.regs.write_selector(inst.dest, result);

        self.history.push(HistoryEntry {
            pc,
            register_index,
            previous_register_value: previous,
            memory: None,
        });
        self.stats.record_retire(inst.opcode);

        if self.trace {
            info!(pc, raw, inst = %disassemble(raw), result, "retired");
        } else {
            debug!(pc, raw, inst = %disassemble(raw), result, "retired");
        }

        let at_end = pc == LAST_ADDRESS;
        if at_end {
            if self.is_running() {
                info!("end of memory reached, run stopped");
            }
            self.state = EngineState::Idle;
        } else {
            self.pc = pc + 1;
        }

        StepInfo {
            pc,
            raw,
            instruction: inst,
            register_index,
            result,
            at_end,
        }
    }

    /// Reverts the newest step: restores its pre-image and the pc it was
    /// fetched from. Returns `false` if the history is empty.
    pub fn step_back(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.restore(&entry);
        self.pc = entry.pc;
        self.stats.steps_undone += 1;
        debug!(pc = entry.pc, "step undone");
        true
    }

    /// Forces idle, replays the history newest-first restoring every
    /// pre-image, and rewinds `pc` to zero. Returns the number of steps undone.
    ///
    /// With an empty history this only rewinds `pc`.
    pub fn reset(&mut self) -> usize {
        self.state = EngineState::Idle;

        let mut undone = 0;
        while let Some(entry) = self.history.pop() {
            self.restore(&entry);
            undone += 1;
        }

        self.pc = 0;
        self.stats.resets += 1;
        info!(undone, "machine reset");
        undone
    }

    /// Enters or leaves the running state.
    pub fn set_running(&mut self, running: bool) {
        let next = if running {
            EngineState::Running
        } else {
            EngineState::Idle
        };
        if next != self.state {
            info!(?next, pc = self.pc, "engine state change");
        }
        self.state = next;
    }

    fn restore(&mut self, entry: &HistoryEntry) {
        if let Err(err) = self
            .regs
            .write(entry.register_index, entry.previous_register_value)
        {
            warn!(%err, "history entry does not fit register file");
        }
        if let Some(cell) = entry.memory {
            self.mem.write(cell.index, cell.value);
        }
    }
}
