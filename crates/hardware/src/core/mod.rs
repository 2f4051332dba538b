//! Machine core.
//!
//! 1. **Architectural State:** Register file and byte-addressed memory.
//! 2. **Functional Units:** The ALU that computes instruction results.
//! 3. **CPU:** The execution engine, undo history, and renderer snapshot.

/// Architectural state (registers, memory).
pub mod arch;

/// Execution engine and history.
pub mod cpu;

/// Functional units.
pub mod units;

pub use cpu::{Cpu, EngineState, Snapshot};
