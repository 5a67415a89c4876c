//! Blocking register transport used by the driver.
//!
//! The driver talks to exactly one device, so the transport is bound to a
//! single 7-bit address when it is constructed.

use core::fmt::Debug;

use embedded_hal::i2c::{I2c, SevenBitAddress};

#[cfg(test)]
pub mod mock;

/// Blocking byte transport to a device at a fixed bus address.
///
/// Implementations must complete each call as one bus transaction and must
/// not interleave bytes from other transactions into it.
pub trait RegisterTransport {
    type Error: Debug;

    /// Write `data` to the device.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write `data`, then fill `buffer` from the device, as one logical transaction.
    fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// [`RegisterTransport`] over any `embedded-hal` I2C bus.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C> I2cTransport<I2C> {
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterTransport for I2cTransport<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    type Error = I2C::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, data)
    }

    fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        // Repeated start, so no other master can slip in between.
        self.i2c.write_read(self.address, data, buffer)
    }
}

impl<T: RegisterTransport + ?Sized> RegisterTransport for &mut T {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }

    fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        (**self).write_read(data, buffer)
    }
}
