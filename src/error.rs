//! Error types for GloveIO

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// GloveIO error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Serial port error
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session not started
    #[error("Session not started")]
    NotStarted,

    /// Frame read timed out before the full response arrived
    #[error("Read timeout: expected {expected} bytes, got {received}")]
    Timeout {
        /// Bytes expected for a complete frame
        expected: usize,
        /// Bytes actually received before the port went quiet
        received: usize,
    },

    /// Calibration file unusable or missing
    #[error("Calibration error: {0}")]
    Calibration(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration file parse error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file write error
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
