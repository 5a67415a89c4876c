//! Data structures used to configure the driver.

use std::path::Path;

use anyhow::{ensure, Context};
use serde_derive::{Deserialize, Serialize};

use crate::registers::{DEFAULT_ADDRESS, MAX_ADDRESS};

/// Per-axis offsets in G, added after the raw-to-G conversion.
///
/// The defaults are a hand calibration of one physical board and are only a
/// starting point for other units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationOffsets {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for CalibrationOffsets {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.1 }
    }
}

impl CalibrationOffsets {
    pub const ZERO: CalibrationOffsets = CalibrationOffsets { x: 0.0, y: 0.0, z: 0.0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// The 7-bit bus address the transport is bound to.
    pub address: u8,
    pub offsets: CalibrationOffsets,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            offsets: CalibrationOffsets::default(),
        }
    }
}

impl DriverConfig {
    /// Parse a YAML document such as
    ///
    /// ```yaml
    /// address: 0x53
    /// offsets:
    ///   z: 0.12
    /// ```
    ///
    /// Fields left out keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config: DriverConfig = serde_yaml::from_str(yaml).context("Unable to parse driver configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        Self::from_yaml_str(&yaml).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.address <= MAX_ADDRESS,
            "Bus address {:#04X} is not a 7-bit address",
            self.address
        );
        ensure!(
            self.offsets.x.is_finite() && self.offsets.y.is_finite() && self.offsets.z.is_finite(),
            "Calibration offsets must be finite"
        );
        Ok(())
    }
}
