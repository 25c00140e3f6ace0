//! Glove wire protocol
//!
//! Request/response cycle, one sample per request:
//! - Host writes a single request byte (0x47, ASCII 'G')
//! - Device responds with one raw byte per sensor channel, in channel
//!   order, no framing or checksum
//!
//! Supported glove models carry 18 or 22 sensor channels.

use crate::types::SensorFrame;

/// Sample request command byte ('G')
pub const REQUEST_SAMPLE: u8 = 0x47;

/// Factory baud rate for the glove's serial interface
pub const DEFAULT_BAUD_RATE: u32 = 115200;

/// Channel count of the 18-sensor glove model
pub const DOF_18: usize = 18;

/// Channel count of the 22-sensor glove model
pub const DOF_22: usize = 22;

/// Decode a raw response buffer into a sensor frame
///
/// Each byte is one unsigned 8-bit reading; channel order is the order on
/// the wire.
pub fn decode_frame(raw: &[u8]) -> SensorFrame {
    SensorFrame::new(raw.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_byte_is_ascii_g() {
        assert_eq!(REQUEST_SAMPLE, b'G');
    }

    #[test]
    fn test_decode_preserves_values_and_order() {
        let raw = [0u8, 1, 2, 255, 128, 7];
        let frame = decode_frame(&raw);
        assert_eq!(frame.values(), &raw);
    }

    #[test]
    fn test_decode_full_18_channel_frame() {
        let raw: Vec<u8> = (0u8..18).collect();
        let frame = decode_frame(&raw);
        assert_eq!(frame.len(), DOF_18);
        assert_eq!(frame.values(), raw.as_slice());
    }
}
