//! Inclination angles from one acceleration sample.

use serde_derive::Serialize;

use crate::sample::AccelerationSample;

/// π as used by the reference firmware. Kept instead of `core::f64::consts::PI`
/// so results match it bit for bit.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159265359;

/// Angle reported when the vertical component is exactly zero.
pub const SATURATED_ANGLE: f64 = 90.0;

fn inclination(horizontal: f64, vertical: f64) -> f64 {
    if vertical == 0.0 {
        return SATURATED_ANGLE;
    }
    (horizontal / vertical).atan() * 360.0 / (2.0 * PI)
}

/// Inclination about the X axis, in degrees.
///
/// Returns exactly 90.0 when `z` is zero regardless of the sign of `x`.
pub fn tilt(x: f64, z: f64) -> f64 {
    inclination(x, z)
}

/// Inclination about the Y axis, in degrees. Same saturation as [`tilt`].
pub fn awe(y: f64, z: f64) -> f64 {
    inclination(y, z)
}

/// Tilt and awe of a single sample, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Orientation {
    pub tilt: f64,
    pub awe: f64,
}

impl Orientation {
    pub fn from_sample(sample: &AccelerationSample) -> Self {
        Self {
            tilt: tilt(sample.x(), sample.z()),
            awe: awe(sample.y(), sample.z()),
        }
    }
}

impl From<&AccelerationSample> for Orientation {
    fn from(sample: &AccelerationSample) -> Self {
        Self::from_sample(sample)
    }
}
