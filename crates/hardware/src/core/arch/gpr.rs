//! General-Purpose Register File.
//!
//! This module implements the byte-wide register file. It performs the following:
//! 1. **Storage:** Holds `N` registers, `1 <= N <= 4`.
//! 2. **Bounds Enforcement:** Reads and writes outside `0..N` are rejected.
//! 3. **Selector Resolution:** Maps 2-bit selectors onto the configured register count.

use crate::common::constants::MAX_REGISTERS;
use crate::common::error::MachineError;

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: Vec<u8>,
}

impl Gpr {
    /// Creates a register file with `count` registers initialized to zero.
    ///
    /// `count` is clamped to `1..=MAX_REGISTERS`; configuration validation
    /// rejects other values before they reach here.
    pub fn new(count: usize) -> Self {
        Self {
            regs: vec![0; count.clamp(1, MAX_REGISTERS)],
        }
    }

    /// Number of registers.
    #[inline]
    pub const fn len(&self) -> usize {
        self.regs.len()
    }

    /// Always `false`; a register file holds at least one register.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::RegisterOutOfRange`] if `idx >= len()`.
    pub fn read(&self, idx: usize) -> Result<u8, MachineError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(MachineError::RegisterOutOfRange {
                index: idx,
                count: self.regs.len(),
            })
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::RegisterOutOfRange`] if `idx >= len()`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), MachineError> {
        let count = self.regs.len();
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(MachineError::RegisterOutOfRange { index: idx, count })?;
        *slot = val;
        Ok(())
    }

    /// Maps a decoded 2-bit selector onto a valid index.
    ///
    /// With fewer than four registers, selectors past the end clamp to the
    /// last register.
    #[inline]
    pub fn resolve(&self, selector: u8) -> usize {
        (selector as usize).min(self.regs.len() - 1)
    }

    /// Reads the register a decoded selector refers to.
    #[inline]
    pub fn read_selector(&self, selector: u8) -> u8 {
        self.regs[self.resolve(selector)]
    }

    /// Writes the register a decoded selector refers to and returns its index.
    #[inline]
    pub fn write_selector(&mut self, selector: u8, val: u8) -> usize {
        let idx = self.resolve(selector);
        self.regs[idx] = val;
        idx
    }

    /// All register values in index order.
    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }
}
