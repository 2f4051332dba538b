//! Common types and constants shared across the debugger.
//!
//! 1. **Constants:** Machine dimensions, assembly syntax tokens, and run cadence.
//! 2. **Error Handling:** Assembly, machine, configuration, and command errors.

/// Machine-wide constants.
pub mod constants;

/// Error types for every fallible operation in the crate.
pub mod error;

pub use constants::{LAST_ADDRESS, MAX_REGISTERS, MEMORY_SIZE};
pub use error::{AsmError, AsmErrorKind, ConfigError, MachineError, SimError};
