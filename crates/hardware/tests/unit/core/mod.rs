//! # Core Unit Tests

/// ALU results against reference byte arithmetic.
pub mod alu;

/// Step semantics, program counter boundary, and run state.
pub mod execution;
