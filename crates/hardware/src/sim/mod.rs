//! Simulation driving.
//!
//! Provides the pieces an interactive front end needs:
//! 1. **Simulator:** A lock-guarded machine handle; every mutation goes through one mutex.
//! 2. **Run Driver:** A background thread that steps at a fixed cadence until stopped.
//! 3. **Commands:** Parsing of the interactive command surface.
//! 4. **Loader:** Reading and assembling source files.

/// Interactive command parsing.
pub mod command;

/// Timed auto-step thread.
pub mod driver;

/// Source file loading.
pub mod loader;

/// Shared simulator handle.
pub mod simulator;

pub use command::{Command, Response};
pub use driver::RunDriver;
pub use simulator::Simulator;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::Cpu;

/// Locks the machine. A panic on another thread leaves the state usable, so
/// poisoning is ignored.
pub(crate) fn lock(cpu: &Mutex<Cpu>) -> MutexGuard<'_, Cpu> {
    cpu.lock().unwrap_or_else(PoisonError::into_inner)
}
