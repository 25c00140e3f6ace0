//! Sensor data types

use serde::{Deserialize, Serialize};

/// One complete set of sensor readings for all glove channels
///
/// Produced fresh by each sample request; readings are raw unsigned 8-bit
/// values in channel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorFrame {
    /// Raw per-channel readings, one byte per sensor
    values: Vec<u8>,
    /// Host-side acquisition timestamp (milliseconds since Unix epoch)
    pub timestamp_ms: Option<u64>,
}

impl SensorFrame {
    /// Create a frame from raw readings, stamped with the current host time
    pub fn new(values: Vec<u8>) -> Self {
        let timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .ok();

        SensorFrame {
            values,
            timestamp_ms,
        }
    }

    /// Raw readings in channel order
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of channels in this frame
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the frame holds no readings
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_accessors() {
        let frame = SensorFrame::new(vec![10, 20, 30]);
        assert_eq!(frame.len(), 3);
        assert!(!frame.is_empty());
        assert_eq!(frame.values(), &[10, 20, 30]);
        assert!(frame.timestamp_ms.is_some());
    }
}
