//! Configuration for the debugger.
//!
//! This module defines the configuration structures used to parameterize
//! the machine and its run driver. It provides:
//! 1. **Defaults:** Baseline register count and run cadence.
//! 2. **Structures:** `general` (machine shape, tracing) and `run` (auto-step cadence) sections.
//! 3. **Validation:** Rejects register counts the 2-bit selectors cannot address.
//!
//! Configuration is supplied as JSON; every field is optional.

use std::time::Duration;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_REGISTER_COUNT, DEFAULT_RUN_INTERVAL_MS, MAX_REGISTERS};
use crate::common::error::ConfigError;

/// Root configuration.
///
/// # Examples
///
/// ```
/// use alusim_core::config::Config;
///
/// let json = r#"{
///     "general": { "register_count": 2, "trace_instructions": true },
///     "run": { "interval_ms": 25 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.register_count, 2);
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.run.interval_ms, 25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Machine shape and tracing
    #[serde(default)]
    pub general: GeneralConfig,
    /// Run driver cadence
    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidRegisterCount`] unless `1 <= register_count <= 4`.
    /// * [`ConfigError::InvalidInterval`] if `interval_ms` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let count = self.general.register_count;
        if count == 0 || count > MAX_REGISTERS {
            return Err(ConfigError::InvalidRegisterCount(count));
        }
        if self.run.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}

/// Machine shape and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Number of registers (1-4)
    #[serde(default = "GeneralConfig::default_register_count")]
    pub register_count: usize,

    /// Log every retired instruction at info level
    #[serde(default)]
    pub trace_instructions: bool,
}

impl GeneralConfig {
    const fn default_register_count() -> usize {
        DEFAULT_REGISTER_COUNT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            register_count: DEFAULT_REGISTER_COUNT,
            trace_instructions: false,
        }
    }
}

/// Timed run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Delay between automatic steps in milliseconds
    #[serde(default = "RunConfig::default_interval_ms")]
    pub interval_ms: u64,
}

impl RunConfig {
    const fn default_interval_ms() -> u64 {
        DEFAULT_RUN_INTERVAL_MS
    }

    /// The step interval as a [`Duration`].
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_RUN_INTERVAL_MS,
        }
    }
}
