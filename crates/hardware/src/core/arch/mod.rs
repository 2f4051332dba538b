//! Architectural state of the machine.

/// General-purpose register file.
pub mod gpr;

/// Byte-addressed main memory.
pub mod memory;

pub use gpr::Gpr;
pub use memory::Memory;
