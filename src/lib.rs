//! ADXL345 accelerometer driver with tilt and awe angle derivation.
//!
//! The driver owns a blocking [`RegisterTransport`] bound to the device
//! address, writes the measurement configuration once with
//! [`Adxl345::initialize`], and then returns calibrated samples in G from
//! [`Adxl345::read_acceleration`]. Scheduling the reads is left to the caller.

pub mod angle;
pub mod config;
pub mod driver;
pub mod error;
pub mod reading;
pub mod registers;
pub mod sample;
pub mod transport;

pub use angle::{awe, tilt, Orientation};
pub use config::{CalibrationOffsets, DriverConfig};
pub use driver::{Adxl345, DriverState};
pub use error::DriverError;
pub use reading::Reading;
pub use sample::{AccelerationSample, RawRegisterFrame};
pub use transport::{I2cTransport, RegisterTransport};
