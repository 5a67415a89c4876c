//! Raw register frames and their conversion to G.

use accelerometer::vector::{F32x3, I16x3};
use serde_derive::Serialize;

use crate::config::CalibrationOffsets;
use crate::registers::DATA_LEN;

/// G per LSB at the default ±2 g range (4 mg/LSB).
pub const MG2G_MULTIPLIER: f64 = 0.004;

/// Converted components closer to zero than this are reported as exactly 0.0.
pub const ZERO_SNAP_THRESHOLD: f64 = 0.005;

/// The six bytes read from `DATAX0..=DATAZ1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRegisterFrame {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawRegisterFrame {
    /// Decode three little-endian `i16`s in X, Y, Z order.
    pub fn from_bytes(bytes: &[u8; DATA_LEN]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }

    pub fn to_sample(self, offsets: &CalibrationOffsets) -> AccelerationSample {
        AccelerationSample {
            x: decode_axis(self.x, offsets.x),
            y: decode_axis(self.y, offsets.y),
            z: decode_axis(self.z, offsets.z),
        }
    }
}

impl From<RawRegisterFrame> for I16x3 {
    fn from(frame: RawRegisterFrame) -> I16x3 {
        I16x3 {
            x: frame.x,
            y: frame.y,
            z: frame.z,
        }
    }
}

/// Calibrated acceleration in G.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccelerationSample {
    x: f64,
    y: f64,
    z: f64,
}

impl AccelerationSample {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

impl From<AccelerationSample> for F32x3 {
    fn from(sample: AccelerationSample) -> F32x3 {
        F32x3 {
            x: sample.x as f32,
            y: sample.y as f32,
            z: sample.z as f32,
        }
    }
}

/// Convert one raw axis reading to G and apply its offset.
pub fn decode_axis(raw: i16, offset: f64) -> f64 {
    snap_to_zero(raw as f64 * MG2G_MULTIPLIER + offset)
}

/// Replace values strictly inside ±[`ZERO_SNAP_THRESHOLD`] with exactly 0.0.
///
/// This also removes the `-0.0` results of the conversion arithmetic.
pub fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < ZERO_SNAP_THRESHOLD {
        0.0
    } else {
        value
    }
}
