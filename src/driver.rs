//! Driver for the ADXL345 three-axis accelerometer.

use accelerometer::vector::{F32x3, I16x3};
use accelerometer::{Accelerometer, Error as AccelError, ErrorKind, RawAccelerometer};
use log::{debug, trace, warn};

use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::registers::{Register, CONFIG_MEASURE, DATA_LEN, SAMPLE_RATE_HZ};
use crate::sample::{AccelerationSample, RawRegisterFrame};
use crate::transport::RegisterTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No configuration has been written yet.
    Uninitialized,
    /// The measurement configuration is applied and samples can be read.
    Ready,
}

/// Owns the transport for the lifetime of the driver.
///
/// Not synchronized: callers sharing one driver between threads must
/// serialize access themselves.
pub struct Adxl345<T> {
    transport: T,
    config: DriverConfig,
    state: DriverState,
}

impl<T> Adxl345<T>
where
    T: RegisterTransport,
{
    pub fn new(transport: T, config: DriverConfig) -> Self {
        Self {
            transport,
            config,
            state: DriverState::Uninitialized,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == DriverState::Ready
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Give the transport back, consuming the driver.
    pub fn release(self) -> T {
        self.transport
    }

    /// Write the measurement configuration and enter the `Ready` state.
    ///
    /// Stops at the first failed write; the driver then stays
    /// `Uninitialized` and no write is retried.
    pub fn initialize(&mut self) -> Result<(), DriverError<T::Error>> {
        if self.is_ready() {
            warn!("ADXL345 at {:#04X} is already initialized", self.config.address);
            return Ok(());
        }

        for entry in CONFIG_MEASURE {
            debug!("write_reg {:<10}({:#04X}) = {:#04x}", entry.reg.name(), entry.reg.addr(), entry.value);
            self.write_register(entry.reg.addr(), entry.value)?;
        }

        self.state = DriverState::Ready;
        debug!("ADXL345 at {:#04X} measuring", self.config.address);
        Ok(())
    }

    /// Read the data block once and convert it to calibrated G.
    pub fn read_acceleration(&mut self) -> Result<AccelerationSample, DriverError<T::Error>> {
        let frame = self.read_raw()?;
        Ok(frame.to_sample(&self.config.offsets))
    }

    /// Read the data block once without conversion.
    pub fn read_raw(&mut self) -> Result<RawRegisterFrame, DriverError<T::Error>> {
        if !self.is_ready() {
            return Err(DriverError::NotInitialized);
        }

        let mut buffer = [0u8; DATA_LEN];
        self.read_register(Register::DataX0.addr(), &mut buffer)?;
        let frame = RawRegisterFrame::from_bytes(&buffer);
        trace!("read_reg {:<10}({:#04X}) = {:02X?} -> {:?}", Register::DataX0.name(), Register::DataX0.addr(), buffer, frame);
        Ok(frame)
    }

    /// Send a `[register, value]` frame.
    ///
    /// Register and value must both fit in a byte; anything wider is
    /// rejected before touching the bus.
    pub fn write_register<R, V>(&mut self, register: R, value: V) -> Result<(), DriverError<T::Error>>
    where
        R: TryInto<u8> + Into<u32> + Copy,
        V: TryInto<u8> + Into<u32> + Copy,
    {
        let (reg, val) = match (register.try_into(), value.try_into()) {
            (Ok(reg), Ok(val)) => (reg, val),
            _ => {
                return Err(DriverError::InvalidRegisterValue {
                    register: register.into(),
                    value: value.into(),
                })
            }
        };

        self.transport.write(&[reg, val]).map_err(DriverError::Transport)
    }

    /// Select `register`, then read `buffer.len()` bytes from it in the same transaction.
    pub fn read_register(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), DriverError<T::Error>> {
        self.transport
            .write_read(&[register], buffer)
            .map_err(DriverError::Transport)
    }
}

fn accel_error<E: core::fmt::Debug>(err: DriverError<E>) -> AccelError<DriverError<E>> {
    let kind = if err.is_transport() { ErrorKind::Bus } else { ErrorKind::Device };
    AccelError::new_with_cause(kind, err)
}

impl<T> Accelerometer for Adxl345<T>
where
    T: RegisterTransport,
{
    type Error = DriverError<T::Error>;

    /// Calibrated acceleration in G.
    fn accel_norm(&mut self) -> Result<F32x3, AccelError<Self::Error>> {
        self.read_acceleration().map(F32x3::from).map_err(accel_error)
    }

    fn sample_rate(&mut self) -> Result<f32, AccelError<Self::Error>> {
        Ok(SAMPLE_RATE_HZ)
    }
}

impl<T> RawAccelerometer<I16x3> for Adxl345<T>
where
    T: RegisterTransport,
{
    type Error = DriverError<T::Error>;

    fn accel_raw(&mut self) -> Result<I16x3, AccelError<Self::Error>> {
        self.read_raw().map(I16x3::from).map_err(accel_error)
    }
}
