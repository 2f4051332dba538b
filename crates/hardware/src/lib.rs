//! Step debugger core for a minimal 8-bit ALU machine.
//!
//! This crate implements the execution engine behind the `alusim` debugger:
//! 1. **ISA:** One-byte instruction encoding, decoding, and disassembly for `add`, `sub`, `and`, `or`.
//! 2. **Core:** Register file, 256-byte memory, program counter, ALU, and the undo history.
//! 3. **Assembler:** Line-oriented assembly text with a `.orig` directive.
//! 4. **Simulation:** Lock-guarded simulator handle, timed run driver, and command surface.
//! 5. **Support:** Configuration, error types, and execution statistics.

/// Assembler for the text mnemonic format.
pub mod asm;
/// Common types and constants (machine sizes, error types).
pub mod common;
/// Debugger configuration (register count, run cadence, tracing).
pub mod config;
/// Machine core (registers, memory, ALU, execution engine, history).
pub mod core;
/// Instruction set (opcode table, decode, encode, disassembly).
pub mod isa;
/// Simulator handle, run driver, command parsing, and source loading.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Machine state plus execution engine.
pub use crate::core::Cpu;
/// Shared, lock-guarded simulator handle used by interactive drivers.
pub use crate::sim::Simulator;
