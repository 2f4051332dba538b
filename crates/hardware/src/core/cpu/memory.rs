//! Program loading.
//!
//! Loads write straight into memory in emission order, so a later pair for
//! the same address wins. They bypass the history, the registers, and the
//! program counter.
//!
//! Loading never clears the history: a `reset` after a load still restores
//! registers to their values before the recorded steps, which may predate
//! the newly loaded program.

use tracing::info;

use super::Cpu;
use crate::asm::program::AssembledProgram;
use crate::common::error::MachineError;

impl Cpu {
    /// Writes every `(address, byte)` pair of `program` into memory.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Busy`] while the engine is running; nothing is written.
    pub fn load(&mut self, program: &AssembledProgram) -> Result<usize, MachineError> {
        if self.is_running() {
            return Err(MachineError::Busy);
        }
        for &(addr, byte) in program.pairs() {
            self.mem.write(addr, byte);
        }
        self.stats.loads += 1;
        self.stats.bytes_loaded += program.len() as u64;
        info!(bytes = program.len(), "program loaded");
        Ok(program.len())
    }

    /// Writes a single byte, as the `set` command does.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Busy`] while the engine is running.
    pub fn write_byte(&mut self, addr: u8, byte: u8) -> Result<(), MachineError> {
        if self.is_running() {
            return Err(MachineError::Busy);
        }
        self.mem.write(addr, byte);
        self.stats.loads += 1;
        self.stats.bytes_loaded += 1;
        info!(addr, byte, "memory set");
        Ok(())
    }
}
