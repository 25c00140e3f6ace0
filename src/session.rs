//! Glove session lifecycle and sample acquisition
//!
//! A session is constructed from a [`GloveConfig`], opens its serial port in
//! `start()`, then serves blocking `read()` calls until `stop()`. Each read
//! issues one request byte per configured sample and waits for the full
//! fixed-length response; a short response is a hard failure with no partial
//! data returned.

use crate::calibration::Calibration;
use crate::config::GloveConfig;
use crate::error::{Error, Result};
use crate::protocol;
use crate::transport::{SerialTransport, Transport};
use crate::types::SensorFrame;
use std::time::Duration;

/// Serial session with a hand-tracking data glove
///
/// Owns the serial transport exclusively. All I/O is synchronous and
/// blocking; callers needing concurrent access must serialize it themselves.
pub struct GloveSession {
    config: GloveConfig,
    /// Loaded from `config.calibration_path` at construction, if set
    calibration: Option<Calibration>,
    /// Open transport - `None` before `start()` and after `stop()`
    transport: Option<Box<dyn Transport>>,
}

impl GloveSession {
    /// Create a session from a validated configuration
    ///
    /// Loads the calibration file if one is configured. No I/O to the
    /// device happens until `start()`.
    pub fn new(config: GloveConfig) -> Result<Self> {
        config.validate()?;

        let calibration = match &config.calibration_path {
            Some(path) => Some(Calibration::from_file(path, config.degrees_of_freedom)?),
            None => None,
        };

        Ok(GloveSession {
            config,
            calibration,
            transport: None,
        })
    }

    /// Session configuration
    pub fn config(&self) -> &GloveConfig {
        &self.config
    }

    /// Loaded calibration, if any
    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    /// Open the configured serial port
    ///
    /// No-op if the session is already started. With an empty `port` in the
    /// configuration, the first port enumerated on the host is used.
    pub fn start(&mut self) -> Result<()> {
        if self.transport.is_some() {
            return Ok(());
        }

        let port = self.resolve_port()?;
        let transport = SerialTransport::open(
            &port,
            self.config.baud_rate,
            Duration::from_millis(self.config.read_timeout_ms),
        )?;

        log::info!(
            "Glove: session started on {} ({} channels)",
            port,
            self.config.degrees_of_freedom
        );
        self.transport = Some(Box::new(transport));
        Ok(())
    }

    /// Start the session over a caller-supplied transport
    ///
    /// Used by tests and simulations to run the session without hardware.
    /// No-op if the session is already started.
    pub fn start_with_transport<T: Transport + 'static>(&mut self, transport: T) -> Result<()> {
        if self.transport.is_some() {
            return Ok(());
        }

        log::debug!("Glove: session started on caller-supplied transport");
        self.transport = Some(Box::new(transport));
        Ok(())
    }

    /// Request and decode sensor frames
    ///
    /// Issues one request byte per configured sample and blocks until each
    /// full frame arrives. Returns `samples_per_read` frames, one per
    /// sample; the device cannot batch, so multi-sample reads are sequential
    /// request/response cycles.
    ///
    /// Fails with [`Error::NotStarted`] outside start..stop and with
    /// [`Error::Timeout`] if the device goes quiet mid-frame. A failed read
    /// returns no partial data.
    pub fn read(&mut self) -> Result<Vec<SensorFrame>> {
        let transport = self.transport.as_mut().ok_or(Error::NotStarted)?;

        let mut frames = Vec::with_capacity(self.config.samples_per_read);
        let mut raw = vec![0u8; self.config.degrees_of_freedom];

        for _ in 0..self.config.samples_per_read {
            let written = transport.write(&[protocol::REQUEST_SAMPLE])?;
            if written != 1 {
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "request byte not written",
                )));
            }
            transport.flush()?;

            read_exact(transport.as_mut(), &mut raw)?;
            frames.push(protocol::decode_frame(&raw));
        }

        Ok(frames)
    }

    /// Request frames and map them through the loaded calibration
    ///
    /// Returns one vector of joint angles in degrees per sample. Fails with
    /// [`Error::Calibration`] if the session has no calibration loaded.
    pub fn read_calibrated(&mut self) -> Result<Vec<Vec<f64>>> {
        let cal = self
            .calibration
            .clone()
            .ok_or_else(|| Error::Calibration("no calibration loaded".to_string()))?;

        let frames = self.read()?;
        Ok(frames.iter().map(|f| cal.apply(f.values())).collect())
    }

    /// Release the serial port
    ///
    /// Idempotent: stopping a session that is not started is a no-op.
    pub fn stop(&mut self) -> Result<()> {
        if self.transport.take().is_some() {
            log::info!("Glove: session stopped");
        }
        Ok(())
    }

    /// True between `start()` and `stop()`
    pub fn is_started(&self) -> bool {
        self.transport.is_some()
    }

    fn resolve_port(&self) -> Result<String> {
        if !self.config.port.is_empty() {
            return Ok(self.config.port.clone());
        }

        let ports = serialport::available_ports()?;
        ports
            .first()
            .map(|p| p.port_name.clone())
            .ok_or_else(|| Error::InvalidParameter("no serial ports found".to_string()))
    }
}

impl Drop for GloveSession {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Read exactly `buf.len()` bytes from the transport
///
/// A zero-length read means the port timeout elapsed with the frame still
/// incomplete.
fn read_exact(transport: &mut dyn Transport, buf: &mut [u8]) -> Result<()> {
    let mut offset = 0;

    while offset < buf.len() {
        let read = transport.read(&mut buf[offset..])?;
        if read == 0 {
            return Err(Error::Timeout {
                expected: buf.len(),
                received: offset,
            });
        }
        offset += read;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    fn session(samples_per_read: usize) -> (GloveSession, MockTransport) {
        let config = GloveConfig {
            degrees_of_freedom: 4,
            samples_per_read,
            ..GloveConfig::glove18()
        };
        let mut session = GloveSession::new(config).unwrap();
        let mock = MockTransport::new();
        session.start_with_transport(mock.clone()).unwrap();
        (session, mock)
    }

    #[test]
    fn test_read_writes_one_request_byte_per_sample() {
        let (mut session, mock) = session(3);
        mock.inject_read(&[0u8; 12]);

        let frames = session.read().unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(mock.get_written(), vec![0x47, 0x47, 0x47]);
    }

    #[test]
    fn test_short_response_reports_byte_counts() {
        let (mut session, mock) = session(1);
        mock.inject_read(&[1, 2]);

        match session.read() {
            Err(Error::Timeout { expected, received }) => {
                assert_eq!(expected, 4);
                assert_eq!(received, 2);
            }
            other => panic!("expected timeout, got {:?}", other.map(|f| f.len())),
        }
    }

    #[test]
    fn test_calibrated_read_requires_calibration() {
        let (mut session, mock) = session(1);
        mock.inject_read(&[0u8; 4]);

        assert!(matches!(
            session.read_calibrated(),
            Err(Error::Calibration(_))
        ));
    }

    #[test]
    fn test_calibrated_read_maps_to_degrees() {
        let (mut session, mock) = session(1);
        session.calibration = Some(Calibration {
            offset: vec![0.0, 1.0, -1.0, 10.0],
            gain: vec![1.0, 2.0, 0.5, 0.0],
        });
        mock.inject_read(&[10, 20, 30, 40]);

        let samples = session.read_calibrated().unwrap();
        assert_eq!(samples, vec![vec![10.0, 41.0, 14.0, 10.0]]);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = GloveConfig {
            degrees_of_freedom: 0,
            ..GloveConfig::glove18()
        };
        assert!(matches!(
            GloveSession::new(config),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_start_is_idempotent_over_attached_transport() {
        let (mut session, mock) = session(1);
        // Second start must not replace the live transport
        session.start_with_transport(MockTransport::new()).unwrap();

        mock.inject_read(&[9, 9, 9, 9]);
        let frames = session.read().unwrap();
        assert_eq!(frames[0].values(), &[9, 9, 9, 9]);
    }
}
