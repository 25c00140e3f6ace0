//! DCU calibration file loading
//!
//! The vendor's Device Configuration Utility saves one text row per sensor,
//! with the offset at whitespace field 6 and the gain (radians per count) at
//! field 9. Rows are addressed by fixed line index; the 18- and 22-sensor
//! glove models use different index tables because two distal flex rows do
//! not correspond to wired channels.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

// Calibration rows per model. The DCU stores the finger-two distal gain in
// the finger-one distal row, so the gain table diverges from the offset
// table at that entry.
const OFFSET_ROWS_18: [usize; 18] = [2, 3, 4, 5, 7, 8, 12, 13, 15, 17, 18, 20, 22, 23, 25, 27, 28, 29];
const GAIN_ROWS_18: [usize; 18] = [2, 3, 4, 5, 7, 8, 12, 13, 10, 17, 18, 20, 22, 23, 25, 27, 28, 29];
const OFFSET_ROWS_22: [usize; 22] = [
    2, 3, 4, 5, 7, 8, 9, 12, 13, 14, 15, 17, 18, 19, 20, 22, 23, 24, 25, 27, 28, 29,
];
const GAIN_ROWS_22: [usize; 22] = [
    2, 3, 4, 5, 7, 8, 9, 12, 13, 14, 10, 17, 18, 19, 20, 22, 23, 24, 25, 27, 28, 29,
];

/// Whitespace field holding the sensor offset in a DCU row
const OFFSET_FIELD: usize = 6;
/// Whitespace field holding the sensor gain in a DCU row
const GAIN_FIELD: usize = 9;

/// Per-channel calibration: joint angle in degrees = raw * gain + offset
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    /// Per-channel offsets (degrees)
    pub offset: Vec<f64>,
    /// Per-channel gains (degrees per count)
    pub gain: Vec<f64>,
}

impl Calibration {
    /// Load calibration from a DCU file
    ///
    /// # Arguments
    /// * `path` - Calibration file path
    /// * `degrees_of_freedom` - Glove model channel count (18 or 22)
    pub fn from_file<P: AsRef<Path>>(path: P, degrees_of_freedom: usize) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, degrees_of_freedom)
    }

    /// Parse calibration from DCU file contents
    pub fn parse(contents: &str, degrees_of_freedom: usize) -> Result<Self> {
        let (offset_rows, gain_rows): (&[usize], &[usize]) = match degrees_of_freedom {
            crate::protocol::DOF_18 => (&OFFSET_ROWS_18, &GAIN_ROWS_18),
            crate::protocol::DOF_22 => (&OFFSET_ROWS_22, &GAIN_ROWS_22),
            n => {
                return Err(Error::Calibration(format!(
                    "no calibration table for a {}-sensor glove (supported: 18, 22)",
                    n
                )));
            }
        };

        let lines: Vec<&str> = contents.lines().collect();

        let mut offset = Vec::with_capacity(degrees_of_freedom);
        for &row in offset_rows {
            offset.push(-field(&lines, row, OFFSET_FIELD)?);
        }

        let mut gain = Vec::with_capacity(degrees_of_freedom);
        for &row in gain_rows {
            // Gains are stored in radians per count
            gain.push(field(&lines, row, GAIN_FIELD)? * 180.0 / std::f64::consts::PI);
        }

        Ok(Calibration { offset, gain })
    }

    /// Map one raw frame to joint angles in degrees
    pub fn apply(&self, raw: &[u8]) -> Vec<f64> {
        raw.iter()
            .zip(self.gain.iter().zip(self.offset.iter()))
            .map(|(&value, (gain, offset))| f64::from(value) * gain + offset)
            .collect()
    }

    /// Number of calibrated channels
    pub fn len(&self) -> usize {
        self.offset.len()
    }

    /// True if no channels are calibrated
    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }
}

/// Extract a numeric field from a DCU row
fn field(lines: &[&str], row: usize, index: usize) -> Result<f64> {
    let line = lines
        .get(row)
        .ok_or_else(|| Error::Calibration(format!("calibration file too short: no row {}", row)))?;

    let token = line.split_whitespace().nth(index).ok_or_else(|| {
        Error::Calibration(format!("row {} has no field {}: {:?}", row, index, line))
    })?;

    token
        .parse::<f64>()
        .map_err(|e| Error::Calibration(format!("row {} field {}: {}", row, index, e)))
}
