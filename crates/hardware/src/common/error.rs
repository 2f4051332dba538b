//! Error definitions.
//!
//! This module defines the failures the debugger can report. It provides:
//! 1. **Assembly Errors:** Unknown mnemonics, malformed operands, and out-of-range addresses, tagged with a line.
//! 2. **Machine Errors:** Register bounds violations and mutations attempted while running.
//! 3. **Configuration Errors:** Invalid JSON or out-of-range settings.
//! 4. **Command Errors:** The aggregate error surfaced to interactive callers.
//!
//! Stepping and resetting are infallible by construction and have no error type.

use std::path::PathBuf;

use thiserror::Error;

/// The reason an assembly line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmErrorKind {
    /// The mnemonic is not one of `add`, `sub`, `and`, `or`.
    #[error("unknown mnemonic '{0}'")]
    UnknownMnemonic(String),

    /// A register or address token does not parse under the numeral rules,
    /// or the operand list has the wrong shape.
    #[error("malformed operand '{0}'")]
    MalformedOperand(String),

    /// An address parsed but does not fit in one byte.
    #[error("address {0:#x} out of range (max 0xff)")]
    AddressOutOfRange(u32),
}

/// An assembly failure located at a 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct AsmError {
    /// 1-based line number in the source text.
    pub line: usize,
    /// What went wrong on that line.
    pub kind: AsmErrorKind,
}

impl AsmError {
    /// Attaches a line number to an error kind.
    pub const fn new(line: usize, kind: AsmErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Errors raised by machine state accessors and engine mutations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A register index is not below the configured register count.
    #[error("register index {index} out of range (machine has {count} registers)")]
    RegisterOutOfRange {
        /// The requested index.
        index: usize,
        /// The configured register count.
        count: usize,
    },

    /// Memory may only be written by `load`/`set` while the engine is idle.
    #[error("machine is running; pause before loading")]
    Busy,
}

/// Errors raised while reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The register count is zero or wider than the 2-bit selector fields allow.
    #[error("register count {0} must be between 1 and 4")]
    InvalidRegisterCount(usize),

    /// The run interval must be non-zero.
    #[error("run interval must be at least 1 ms")]
    InvalidInterval,
}

/// Errors surfaced to the interactive caller as a rejected command.
///
/// Every variant means nothing was mutated.
#[derive(Debug, Error)]
pub enum SimError {
    /// The command word is not part of the command surface.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// The command needs an argument that was not supplied.
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// Human-readable description of the missing argument.
        expected: &'static str,
    },

    /// Assembly of a source file failed.
    #[error(transparent)]
    Asm(#[from] AsmError),

    /// The address or instruction text of a `set` command was rejected.
    #[error(transparent)]
    Syntax(#[from] AsmErrorKind),

    /// The engine refused the mutation.
    #[error(transparent)]
    Machine(#[from] MachineError),

    /// A source file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// The file that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The run driver thread could not be started.
    #[error("could not start run driver: {0}")]
    Thread(#[source] std::io::Error),

    /// The state snapshot could not be serialized.
    #[error("could not serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
