//! Register map of the ADXL345 and the fixed start-up configuration.

/// Bus address with the ALT ADDRESS pin tied low.
pub const DEFAULT_ADDRESS: u8 = 0x53;

/// Bus address with the ALT ADDRESS pin tied high.
pub const ALT_ADDRESS: u8 = 0x1D;

/// Highest address expressible in 7-bit I2C addressing.
pub const MAX_ADDRESS: u8 = 0x7F;

/// Length of the acceleration data block starting at `DATAX0`.
pub const DATA_LEN: usize = 6;

macro_rules! registers {
    (
        $enum_name:ident {
            $($(#[$meta:meta])* $name:ident = $val:expr),* $(,)?
        }
    ) => {
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum $enum_name {
            $($(#[$meta])* $name = $val),*
        }

        impl $enum_name {
            pub fn addr(self) -> u8 {
                self as u8
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $($enum_name::$name => stringify!($name),)*
                }
            }
        }

        impl From<$enum_name> for u8 {
            fn from(r: $enum_name) -> u8 {
                r as u8
            }
        }
    };
}

registers!(Register {
    /// Output data rate and power mode.
    BwRate = 0x2C,
    /// Standby/measurement control.
    PowerCtl = 0x2D,
    /// Interrupt source enable mask.
    IntEnable = 0x2E,
    /// Range, justification and resolution.
    DataFormat = 0x31,
    /// First of the six acceleration data registers (X0, X1, Y0, Y1, Z0, Z1).
    DataX0 = 0x32,
});

/// `BW_RATE` code for a 100 Hz output data rate.
pub const RATE_100_HZ: u8 = 0x0A;
/// Output data rate selected by [`RATE_100_HZ`], in Hz.
pub const SAMPLE_RATE_HZ: f32 = 100.0;
/// `POWER_CTL` measure bit (D3).
pub const MEASURE: u8 = 1 << 3;
/// `INT_ENABLE` with every source masked.
pub const INTERRUPTS_DISABLED: u8 = 0x00;
/// `DATA_FORMAT` default: ±2 g, right-justified, 10-bit.
pub const FORMAT_DEFAULT: u8 = 0x00;

/// One register write in a configuration table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegConfig {
    pub reg: Register,
    pub value: u8,
}

/// Written once, in order, when the driver is initialized.
pub const CONFIG_MEASURE: &[RegConfig] = &[
    RegConfig {
        reg: Register::BwRate,
        value: RATE_100_HZ, // 100 Hz
    },
    RegConfig {
        reg: Register::PowerCtl,
        value: MEASURE, // Leave standby
    },
    RegConfig {
        reg: Register::IntEnable,
        value: INTERRUPTS_DISABLED,
    },
    RegConfig {
        reg: Register::DataFormat,
        value: FORMAT_DEFAULT, // ±2 g
    },
];
