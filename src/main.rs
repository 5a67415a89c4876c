use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::sys as _; // If using the `binstart` feature of `esp-idf-sys`, always keep this module imported
use log::info;

use adxl345_tilt::DriverConfig;

mod imu;

fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches(); //Needed for esp32-rs
    esp_idf_svc::log::EspLogger::initialize_default();
    info!("Entered Main function!");

    let peripherals = Peripherals::take()?;

    let handle = imu::start(
        DriverConfig::default(),
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio22,
    )?;

    handle
        .join()
        .map_err(|_| anyhow::anyhow!("Sampling thread panicked"))?
}
