//! Mock transport for hardware-free testing

use super::Transport;
use crate::error::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock transport backed by in-memory buffers
///
/// Clones share the same buffers, so a test can keep one handle for
/// injecting device responses while a session owns the other.
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

struct MockTransportInner {
    read_buffer: VecDeque<u8>,
    write_buffer: Vec<u8>,
}

impl MockTransport {
    /// Create a new mock transport with empty buffers
    pub fn new() -> Self {
        MockTransport {
            inner: Arc::new(Mutex::new(MockTransportInner {
                read_buffer: VecDeque::new(),
                write_buffer: Vec::new(),
            })),
        }
    }

    /// Queue device response bytes to be returned by subsequent reads
    pub fn inject_read(&self, data: &[u8]) {
        let mut inner = self.inner.lock().unwrap();
        inner.read_buffer.extend(data);
    }

    /// All bytes written to the transport so far
    pub fn get_written(&self) -> Vec<u8> {
        let inner = self.inner.lock().unwrap();
        inner.write_buffer.clone()
    }

    /// Discard recorded writes
    pub fn clear_written(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.write_buffer.clear();
    }

    /// Discard queued response bytes
    pub fn clear_read(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.read_buffer.clear();
    }
}

impl Transport for MockTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        // An empty queue reads as 0 bytes, which callers treat the same as
        // an elapsed port timeout.
        let mut inner = self.inner.lock().unwrap();
        let available = inner.read_buffer.len().min(buffer.len());

        for item in buffer.iter_mut().take(available) {
            *item = inner.read_buffer.pop_front().unwrap();
        }

        Ok(available)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let mut inner = self.inner.lock().unwrap();
        inner.write_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn available(&mut self) -> Result<usize> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.read_buffer.len())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injected_bytes_round_trip() {
        let mock = MockTransport::new();
        mock.inject_read(&[1, 2, 3]);

        let mut handle = mock.clone();
        let mut buf = [0u8; 8];
        assert_eq!(handle.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);

        // Drained queue behaves like a timed-out port
        assert_eq!(handle.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_writes_are_recorded_across_clones() {
        let mock = MockTransport::new();
        let mut handle = mock.clone();
        handle.write(&[0x47]).unwrap();
        handle.write(&[0x47]).unwrap();
        assert_eq!(mock.get_written(), vec![0x47, 0x47]);

        mock.clear_written();
        assert!(mock.get_written().is_empty());
    }
}
