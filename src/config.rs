//! Configuration for a glove session
//!
//! Loads configuration from TOML file with the minimal parameters needed
//! to talk to the device.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_baud_rate() -> u32 {
    crate::protocol::DEFAULT_BAUD_RATE
}

fn default_samples_per_read() -> usize {
    1
}

fn default_read_timeout_ms() -> u64 {
    1000
}

/// Glove session configuration
///
/// Immutable once a session has been constructed from it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GloveConfig {
    /// Number of independent sensor channels on the glove (18 or 22 on
    /// supported models)
    pub degrees_of_freedom: usize,

    /// Serial port name (e.g. `/dev/ttyUSB0`, `COM3`). Empty string means
    /// use the first port enumerated on the host.
    #[serde(default)]
    pub port: String,

    /// Baud rate
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// Number of samples requested per `read()` call
    #[serde(default = "default_samples_per_read")]
    pub samples_per_read: usize,

    /// Read timeout in milliseconds for one frame
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    /// Optional DCU calibration file to load at session construction
    #[serde(default)]
    pub calibration_path: Option<PathBuf>,
}

impl GloveConfig {
    /// Load configuration from TOML file
    ///
    /// # Arguments
    /// - `path`: Path to TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: GloveConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Default configuration for the 18-sensor glove model
    pub fn glove18() -> Self {
        Self {
            degrees_of_freedom: crate::protocol::DOF_18,
            port: String::new(),
            baud_rate: default_baud_rate(),
            samples_per_read: default_samples_per_read(),
            read_timeout_ms: default_read_timeout_ms(),
            calibration_path: None,
        }
    }

    /// Default configuration for the 22-sensor glove model
    pub fn glove22() -> Self {
        Self {
            degrees_of_freedom: crate::protocol::DOF_22,
            ..Self::glove18()
        }
    }

    /// Check parameter ranges
    ///
    /// All numeric parameters must be positive. The port may be left empty
    /// to pick the first enumerated port at `start()`.
    pub fn validate(&self) -> Result<()> {
        if self.degrees_of_freedom == 0 {
            return Err(Error::InvalidParameter(
                "degrees_of_freedom must be positive".to_string(),
            ));
        }
        if self.baud_rate == 0 {
            return Err(Error::InvalidParameter(
                "baud_rate must be positive".to_string(),
            ));
        }
        if self.samples_per_read == 0 {
            return Err(Error::InvalidParameter(
                "samples_per_read must be positive".to_string(),
            ));
        }
        if self.read_timeout_ms == 0 {
            return Err(Error::InvalidParameter(
                "read_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GloveConfig {
    fn default() -> Self {
        Self::glove18()
    }
}
