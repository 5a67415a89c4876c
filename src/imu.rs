//! Sampling thread for the ADXL345 on I2C0.

use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Context;
use esp_idf_hal::gpio::{Gpio21, Gpio22};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver, I2C0};
use esp_idf_hal::prelude::*;
use log::{error, info};

use adxl345_tilt::{Adxl345, DriverConfig, I2cTransport, Reading};

/// Interval between two printed readings (1 Hz).
const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

pub fn start(
    config: DriverConfig,
    i2c: I2C0,
    sda: Gpio21,
    scl: Gpio22,
) -> anyhow::Result<JoinHandle<anyhow::Result<()>>> {
    config.validate()?;

    let handle = std::thread::Builder::new()
        .name("imu".into())
        .spawn(move || -> anyhow::Result<()> {
            let i2c_config = I2cConfig::new().baudrate(100.kHz().into());
            let i2c = I2cDriver::new(i2c, sda, scl, &i2c_config).context("Unable to open I2C0")?;

            let transport = I2cTransport::new(i2c, config.address);
            let mut accelerometer = Adxl345::new(transport, config);
            accelerometer
                .initialize()
                .with_context(|| format!("ADXL345 at {:#04X} did not accept its configuration", config.address))?;
            info!("ADXL345 ready at {:#04X}", config.address);

            loop {
                // A failed read only costs this sample; the next tick tries again.
                match accelerometer.read_acceleration() {
                    Ok(sample) => info!("\n{}\n", Reading::from(sample)),
                    Err(e) => error!("Failed to read ADXL345: {}", e),
                }
                std::thread::sleep(SAMPLE_INTERVAL);
            }
        })?;

    Ok(handle)
}
