//! Bus and GPIO plumbing between the display driver and the OS.
//!
//! The OS layer hands us an I2C handle (anything implementing
//! [`embedded_hal::i2c::I2c`]) and a button input (anything
//! implementing [`embedded_hal::digital::InputPin`]). This module adds
//! the few seams `embedded-hal` does not cover: bus configuration and
//! explicit, fallible release at shutdown.
//!
//! ## Components
//!
//! - **transfer**: accumulates protocol byte-writes into one bus write
//! - **delay**: protocol delay requests → real-time sleeps
//! - **interface**: SSD13xx command/data framing on top of `transfer`

pub mod delay;
pub mod interface;
pub mod transfer;

use core::fmt::Debug;
use core::time::Duration;

use embedded_hal::digital::InputPin;

use crate::error::{Error, Result};

/// Logic level of a digital line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

impl From<bool> for Level {
    /// `true` is high.
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Read the current level of an input line.
pub fn read_level<P: InputPin>(pin: &mut P) -> core::result::Result<Level, P::Error> {
    pin.is_high().map(Level::from)
}

/// I2C clock selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusSpeed {
    /// 100 kHz.
    Standard,
    /// 400 kHz.
    Fast,
    /// 1 MHz.
    FastPlus,
}

impl BusSpeed {
    pub fn hz(self) -> u32 {
        match self {
            BusSpeed::Standard => 100_000,
            BusSpeed::Fast => 400_000,
            BusSpeed::FastPlus => 1_000_000,
        }
    }
}

/// Parameters applied to a freshly opened bus handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusConfig {
    pub speed: BusSpeed,
    pub timeout: Duration,
    /// Target used when a write does not name one explicitly.
    pub default_address: u8,
}

impl BusConfig {
    /// Reject values no I2C controller can honour.
    ///
    /// Addresses 0x00-0x07 and 0x78-0x7F are reserved on I2C; anything
    /// above 0x7F is not a 7-bit address.
    pub fn validate(&self) -> Result<()> {
        if !(0x08..=0x77).contains(&self.default_address) {
            return Err(Error::Config(format!(
                "address {:#04x} is reserved or not 7-bit",
                self.default_address
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be non-zero".into()));
        }
        Ok(())
    }
}

/// Bus handles that accept speed/timeout/address settings.
pub trait ConfigureBus {
    type Error: Debug;

    fn configure(&mut self, config: &BusConfig) -> core::result::Result<(), Self::Error>;
}

/// Handles that must be closed exactly once at shutdown.
///
/// Release consumes the handle, so a second release of the same handle
/// cannot be expressed.
pub trait Release {
    type Error: Debug;

    fn release(self) -> core::result::Result<(), Self::Error>;
}
