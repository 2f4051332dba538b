//! Execution statistics collection and reporting.
//!
//! This module tracks what the engine has done over a session. It provides:
//! 1. **Retirement:** Total steps executed and the per-opcode instruction mix.
//! 2. **History:** Steps undone individually and full resets performed.
//! 3. **Loading:** Programs loaded and bytes written by loads.

use std::fmt::Write;

use crate::isa::instruction::Opcode;

/// Session statistics. Counters are cumulative and survive `reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions executed by `step`.
    pub instructions_retired: u64,
    /// Retired instructions by opcode, indexed by opcode value.
    pub opcode_mix: [u64; 4],
    /// Steps reverted one at a time with `step_back`.
    pub steps_undone: u64,
    /// Number of `reset` operations.
    pub resets: u64,
    /// Number of programs loaded (including single-line `set`).
    pub loads: u64,
    /// Memory bytes written by loads.
    pub bytes_loaded: u64,
}

impl SimStats {
    /// Creates an empty statistics block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one retired instruction.
    pub const fn record_retire(&mut self, op: Opcode) {
        self.instructions_retired += 1;
        self.opcode_mix[op.bits() as usize] += 1;
    }

    /// Retired count for one opcode.
    pub const fn retired(&self, op: Opcode) -> u64 {
        self.opcode_mix[op.bits() as usize]
    }

    /// Renders a multi-line summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "instructions retired: {}", self.instructions_retired);
        for op in Opcode::ALL {
            let count = self.retired(op);
            let pct = if self.instructions_retired == 0 {
                0.0
            } else {
                count as f64 * 100.0 / self.instructions_retired as f64
            };
            let _ = writeln!(out, "  {:<4} {:>8} ({pct:5.1}%)", op.mnemonic(), count);
        }
        let _ = writeln!(out, "steps undone:         {}", self.steps_undone);
        let _ = writeln!(out, "resets:               {}", self.resets);
        let _ = write!(
            out,
            "loads:                {} ({} bytes)",
            self.loads, self.bytes_loaded
        );
        out
    }
}
