//! GloveIO - Host-side driver for hand-tracking data gloves
//!
//! This library interfaces CyberGlove-style data gloves over a serial link:
//! it opens the port, requests samples with the device's single-byte command,
//! and decodes the fixed-length binary responses into per-channel sensor
//! readings.
//!
//! ## Example
//!
//! ```no_run
//! use glove_io::{GloveConfig, GloveSession};
//!
//! # fn main() -> glove_io::Result<()> {
//! let config = GloveConfig {
//!     port: "/dev/ttyUSB0".to_string(),
//!     ..GloveConfig::glove18()
//! };
//!
//! let mut session = GloveSession::new(config)?;
//! session.start()?;
//! for frame in session.read()? {
//!     println!("readings: {:?}", frame.values());
//! }
//! session.stop()?;
//! # Ok(())
//! # }
//! ```

pub mod calibration;
pub mod config;
pub mod error;
pub mod protocol;
pub mod session;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use calibration::Calibration;
pub use config::GloveConfig;
pub use error::{Error, Result};
pub use session::GloveSession;
pub use types::SensorFrame;
