//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single mutable root
//! of the machine. It coordinates the following:
//! 1. **State Management:** Registers, memory, and the program counter.
//! 2. **Engine State:** Whether a timed run is in progress.
//! 3. **History:** The undo log of pre-images, kept alongside the state it describes.
//! 4. **Observability:** Statistics and the read-only snapshot consumed by renderers.

/// Step, undo, reset, and run-state transitions.
pub mod execution;

/// Undo log entries and stack.
pub mod history;

/// Program loading and direct memory writes.
pub mod memory;

use serde::Serialize;

use crate::common::error::MachineError;
use crate::config::Config;
use crate::core::arch::{Gpr, Memory};
use crate::stats::SimStats;

pub use history::{HistoryEntry, HistoryLog, MemoryPreImage};

/// Engine-level run state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    /// No run in progress; steps happen only on request.
    #[default]
    Idle,
    /// A run driver is stepping the machine at a fixed cadence.
    Running,
}

/// Read-only copy of everything a renderer displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Register values in index order.
    pub registers: Vec<u8>,
    /// All 256 memory cells in address order.
    pub memory: Vec<u8>,
    /// Program counter.
    pub pc: u8,
    /// Whether the engine is in the running state.
    pub running: bool,
}

/// Machine state plus execution engine.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub(crate) regs: Gpr,
    pub(crate) mem: Memory,
    pub(crate) pc: u8,
    pub(crate) state: EngineState,
    pub(crate) history: HistoryLog,
    /// Emit every retired instruction at `info` level instead of `debug`.
    pub trace: bool,
    /// Session statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates an idle machine with zeroed registers and memory.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the register count and trace flag.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(config.general.register_count),
            mem: Memory::new(),
            pc: 0,
            state: EngineState::Idle,
            history: HistoryLog::new(),
            trace: config.general.trace_instructions,
            stats: SimStats::new(),
        }
    }

    /// Program counter.
    #[inline]
    pub const fn pc(&self) -> u8 {
        self.pc
    }

    /// Current engine state.
    #[inline]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// `true` while in [`EngineState::Running`].
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Register values in index order.
    pub fn registers(&self) -> &[u8] {
        self.regs.as_slice()
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::RegisterOutOfRange`] if `idx` is not below the register count.
    pub fn register(&self, idx: usize) -> Result<u8, MachineError> {
        self.regs.read(idx)
    }

    /// Overwrites a register without recording history, like a debugger poke.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::RegisterOutOfRange`] if `idx` is not below the register count.
    pub fn set_register(&mut self, idx: usize, val: u8) -> Result<(), MachineError> {
        self.regs.write(idx, val)
    }

    /// All memory cells in address order.
    pub const fn memory(&self) -> &[u8] {
        self.mem.as_slice()
    }

    /// Reads one memory cell.
    #[inline]
    pub const fn read_memory(&self, addr: u8) -> u8 {
        self.mem.read(addr)
    }

    /// The undo log.
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Copies out the renderer-facing state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: self.regs.as_slice().to_vec(),
            memory: self.mem.as_slice().to_vec(),
            pc: self.pc,
            running: self.is_running(),
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
