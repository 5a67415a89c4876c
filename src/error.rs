use core::fmt;

/// Errors returned by the [`Adxl345`](crate::Adxl345) driver.
///
/// `E` is the error type of the underlying transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError<E> {
    /// The bus write or read failed. Never retried by the driver.
    Transport(E),
    /// A sample was requested before a successful `initialize()`.
    NotInitialized,
    /// A register address or value does not fit in 8 bits.
    InvalidRegisterValue { register: u32, value: u32 },
}

impl<E> DriverError<E> {
    pub fn is_transport(&self) -> bool {
        matches!(self, DriverError::Transport(_))
    }
}

impl<E: fmt::Debug> fmt::Display for DriverError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Transport(e) => write!(f, "Bus transaction failed: {:?}", e),
            DriverError::NotInitialized => write!(f, "Device read before initialization"),
            DriverError::InvalidRegisterValue { register, value } => write!(
                f,
                "Register write out of 8-bit range: register {:#X}, value {:#X}",
                register, value
            ),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for DriverError<E> {}
