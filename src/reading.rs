use core::fmt;

use serde_derive::Serialize;

use crate::angle::Orientation;
use crate::sample::AccelerationSample;

/// A sample together with the angles derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub sample: AccelerationSample,
    pub orientation: Orientation,
}

impl From<AccelerationSample> for Reading {
    fn from(sample: AccelerationSample) -> Self {
        Self {
            orientation: Orientation::from_sample(&sample),
            sample,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X accel:\t{:.1} G", self.sample.x())?;
        writeln!(f, "Y accel:\t{:.1} G", self.sample.y())?;
        writeln!(f, "Z accel:\t{:.1} G", self.sample.z())?;
        writeln!(f, "Tilt(x-axis):\t{:.1} Deg", self.orientation.tilt)?;
        write!(f, "Awe(y-axis):\t{:.1} Deg", self.orientation.awe)
    }
}
