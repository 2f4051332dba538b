//! Interactive command surface.
//!
//! Commands are whitespace-separated and case-sensitive:
//!
//! ```text
//! step | run | pause | reset | back
//! load <path>
//! set <addr> <mnemonic> $<d>, $<s1>, $<s2>
//! show | dump | stats | quit | q
//! ```
//!
//! Parsing validates every argument, so a command that parses can be applied
//! without a syntax failure halfway through.

use std::path::PathBuf;
use std::str::FromStr;

use crate::asm::assembler::{parse_address, parse_instruction};
use crate::common::error::SimError;
use crate::core::Snapshot;
use crate::core::cpu::execution::StepInfo;
use crate::stats::SimStats;

/// A parsed interactive command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Execute one instruction.
    Step,
    /// Toggle the timed run.
    Run,
    /// Stop the timed run.
    Pause,
    /// Undo every recorded step and rewind to address zero.
    Reset,
    /// Undo the newest step.
    Back,
    /// Assemble a source file and load it into memory.
    Load(PathBuf),
    /// Write one assembled instruction directly into memory.
    Set {
        /// Target address.
        address: u8,
        /// Encoded instruction byte.
        byte: u8,
    },
    /// Return the renderer snapshot.
    Show,
    /// Return the snapshot as JSON.
    Dump,
    /// Return session statistics.
    Stats,
    /// End the session.
    Quit,
}

/// Result of a successfully applied command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// One instruction was executed.
    Stepped(StepInfo),
    /// The run state after a `run` or `pause`.
    Running(bool),
    /// Number of steps undone by `reset`.
    Reset(usize),
    /// Whether `back` found a step to undo.
    Undone(bool),
    /// Number of bytes written by `load`.
    Loaded(usize),
    /// A `set` was applied.
    Set {
        /// Address written.
        address: u8,
        /// Byte written.
        byte: u8,
    },
    /// State for display.
    Snapshot(Snapshot),
    /// State serialized as JSON.
    Json(String),
    /// Session statistics.
    Stats(SimStats),
    /// The caller should end the session.
    Quit,
}

impl FromStr for Command {
    type Err = SimError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let cmd = match word {
            "step" => Self::Step,
            "run" => Self::Run,
            "pause" => Self::Pause,
            "reset" => Self::Reset,
            "back" => Self::Back,
            "show" => Self::Show,
            "dump" => Self::Dump,
            "stats" => Self::Stats,
            "quit" | "q" => Self::Quit,
            "load" => {
                if rest.is_empty() {
                    return Err(SimError::MissingArgument {
                        command: "load",
                        expected: "a source file path",
                    });
                }
                Self::Load(PathBuf::from(rest))
            }
            "set" => {
                let Some((addr, instruction)) = rest.split_once(char::is_whitespace) else {
                    return Err(SimError::MissingArgument {
                        command: "set",
                        expected: "an address and an instruction",
                    });
                };
                Self::Set {
                    address: parse_address(addr)?,
                    byte: parse_instruction(instruction)?,
                }
            }
            other => return Err(SimError::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }
}
