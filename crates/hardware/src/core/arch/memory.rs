//! Byte-addressed main memory.
//!
//! Addresses are `u8` and the memory has exactly [`MEMORY_SIZE`] cells, so
//! every access is in range without a separate check.

use crate::common::constants::MEMORY_SIZE;

/// 256 bytes of RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte.
    #[inline]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes one byte.
    #[inline]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// All cells in address order.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
