//! Simulator: the machine behind a single lock, plus its run driver.
//!
//! The interactive driver and the run driver both mutate the same [`Cpu`].
//! Every operation here takes the mutex for its whole duration, so steps,
//! resets and loads never interleave.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{info, warn};

use super::command::{Command, Response};
use super::driver::RunDriver;
use super::{loader, lock};
use crate::asm::program::AssembledProgram;
use crate::common::error::{MachineError, SimError};
use crate::config::Config;
use crate::core::cpu::execution::StepInfo;
use crate::core::{Cpu, Snapshot};
use crate::stats::SimStats;

/// Shared machine handle with timed-run support.
#[derive(Debug)]
pub struct Simulator {
    cpu: Arc<Mutex<Cpu>>,
    driver: Option<RunDriver>,
    interval: Duration,
}

impl Simulator {
    /// Creates an idle simulator from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Arc::new(Mutex::new(Cpu::new(config))),
            driver: None,
            interval: config.run.interval(),
        }
    }

    /// Locks the machine for direct inspection or pokes.
    ///
    /// Holding the guard blocks the run driver.
    pub fn cpu(&self) -> MutexGuard<'_, Cpu> {
        lock(&self.cpu)
    }

    /// `true` while the engine is in the running state.
    pub fn is_running(&self) -> bool {
        self.cpu().is_running()
    }

    /// Executes one instruction. Valid whether or not a run is in progress.
    pub fn step(&self) -> StepInfo {
        self.cpu().step()
    }

    /// Enters the running state and starts the run driver. No-op if already running.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Thread`] if the driver cannot be started; the
    /// engine is left idle.
    pub fn run(&mut self) -> Result<(), SimError> {
        if self.is_running() {
            return Ok(());
        }
        if let Some(stale) = self.driver.take() {
            stale.stop();
        }

        self.cpu().set_running(true);
        match RunDriver::spawn(Arc::clone(&self.cpu), self.interval) {
            Ok(driver) => {
                self.driver = Some(driver);
                Ok(())
            }
            Err(err) => {
                self.cpu().set_running(false);
                Err(err)
            }
        }
    }

    /// Leaves the running state and waits for the run driver to stop.
    pub fn pause(&mut self) {
        self.cpu().set_running(false);
        if let Some(driver) = self.driver.take() {
            driver.stop();
        }
    }

    /// Toggles the run state. Returns `true` if the engine is now running.
    ///
    /// # Errors
    ///
    /// Propagates [`Simulator::run`] failures.
    pub fn toggle_run(&mut self) -> Result<bool, SimError> {
        if self.is_running() {
            self.pause();
            Ok(false)
        } else {
            self.run()?;
            Ok(true)
        }
    }

    /// Blocks until a run ends by itself (end of memory). Returns at once if idle.
    pub fn wait(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.join();
        }
    }

    /// Stops any run and replays the whole history. Returns the steps undone.
    pub fn reset(&mut self) -> usize {
        self.pause();
        self.cpu().reset()
    }

    /// Stops any run and undoes the newest step.
    pub fn step_back(&mut self) -> bool {
        self.pause();
        self.cpu().step_back()
    }

    /// Loads an assembled program.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Busy`] while running.
    pub fn load(&mut self, program: &AssembledProgram) -> Result<usize, SimError> {
        Ok(self.cpu().load(program)?)
    }

    /// Assembles a file and loads it. Nothing is written unless the whole
    /// file assembles.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Busy`] while running, or the read/assembly error.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, SimError> {
        if self.is_running() {
            return Err(MachineError::Busy.into());
        }
        let program = loader::assemble_file(path)?;
        self.load(&program)
    }

    /// Writes one instruction byte.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Busy`] while running.
    pub fn set(&mut self, address: u8, byte: u8) -> Result<(), SimError> {
        Ok(self.cpu().write_byte(address, byte)?)
    }

    /// Copies out the renderer-facing state.
    pub fn snapshot(&self) -> Snapshot {
        self.cpu().snapshot()
    }

    /// Copies out the session statistics.
    pub fn stats(&self) -> SimStats {
        self.cpu().stats.clone()
    }

    /// Applies one interactive command.
    ///
    /// # Errors
    ///
    /// Any error means the command was rejected and nothing changed.
    pub fn execute(&mut self, command: Command) -> Result<Response, SimError> {
        self.apply(command)
            .inspect_err(|err| warn!(%err, "command rejected"))
    }

    fn apply(&mut self, command: Command) -> Result<Response, SimError> {
        let response = match command {
            Command::Step => Response::Stepped(self.step()),
            Command::Run => Response::Running(self.toggle_run()?),
            Command::Pause => {
                self.pause();
                Response::Running(false)
            }
            Command::Reset => Response::Reset(self.reset()),
            Command::Back => Response::Undone(self.step_back()),
            Command::Load(path) => {
                let bytes = self.load_file(&path)?;
                info!(path = %path.display(), bytes, "loaded");
                Response::Loaded(bytes)
            }
            Command::Set { address, byte } => {
                self.set(address, byte)?;
                Response::Set { address, byte }
            }
            Command::Show => Response::Snapshot(self.snapshot()),
            Command::Dump => Response::Json(serde_json::to_string_pretty(&self.snapshot())?),
            Command::Stats => Response::Stats(self.stats()),
            Command::Quit => {
                self.pause();
                Response::Quit
            }
        };
        Ok(response)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Drop for Simulator {
    fn drop(&mut self) {
        self.pause();
    }
}
