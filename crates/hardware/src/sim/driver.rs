//! Timed run driver.
//!
//! While the engine is running, a background thread steps the machine once
//! per interval. The wait between steps is a receive on a stop channel, so a
//! pause wakes the thread at once instead of after the full interval; the
//! thread never issues another step after it has been told to stop.

use std::sync::mpsc::{RecvTimeoutError, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use super::lock;
use crate::common::error::SimError;
use crate::core::Cpu;

/// Handle to a running auto-step thread.
#[derive(Debug)]
pub struct RunDriver {
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl RunDriver {
    /// Starts stepping `cpu` every `interval` until its engine state leaves
    /// running, it reaches the end of memory, or the driver is stopped.
    ///
    /// The caller puts the engine into the running state first.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Thread`] if the thread cannot be spawned.
    pub fn spawn(cpu: Arc<Mutex<Cpu>>, interval: Duration) -> Result<Self, SimError> {
        let (stop, stop_rx) = channel::<()>();

        let handle = thread::Builder::new()
            .name("run-driver".into())
            .spawn(move || {
                debug!(?interval, "run driver started");
                loop {
                    {
                        let mut cpu = lock(&cpu);
                        if !cpu.is_running() {
                            break;
                        }
                        if cpu.step().at_end {
                            break;
                        }
                    }

                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("run driver stopped");
            })
            .map_err(SimError::Thread)?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// `true` once the thread has exited on its own.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Signals the thread and waits for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    /// Waits for the thread to exit without signalling it.
    pub fn join(mut self) {
        self.wait();
    }

    fn shutdown(&mut self) {
        // A send error means the thread already exited.
        let _ = self.stop.send(());
        self.wait();
    }

    fn wait(&mut self) {
        if self.handle.take().is_some_and(|handle| handle.join().is_err()) {
            warn!("run driver panicked");
        }
    }
}

impl Drop for RunDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}
