//! Linux device backends: `/dev/i2c-*` and GPIO character devices.

use core::convert::Infallible;

use embedded_hal::digital::{self, InputPin};
use embedded_hal::i2c::{self, I2c, Operation, SevenBitAddress};
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::{CdevPin, I2cdev};
use log::{debug, info};

use crate::bus::{BusConfig, ConfigureBus, Release};
use crate::error::{Error, Result};

/// An opened I2C adapter.
pub struct LinuxBus {
    dev: I2cdev,
    config: Option<BusConfig>,
}

impl LinuxBus {
    pub fn open(path: &str) -> Result<Self> {
        let dev = I2cdev::new(path).map_err(|e| Error::resource("I2C bus", e))?;
        debug!("I2C: opened {}", path);
        Ok(Self { dev, config: None })
    }

    /// Settings accepted by the last `configure`.
    pub fn config(&self) -> Option<&BusConfig> {
        self.config.as_ref()
    }
}

impl i2c::ErrorType for LinuxBus {
    type Error = <I2cdev as i2c::ErrorType>::Error;
}

impl I2c for LinuxBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> core::result::Result<(), Self::Error> {
        self.dev.transaction(address, operations)
    }
}

impl ConfigureBus for LinuxBus {
    type Error = Error;

    fn configure(&mut self, config: &BusConfig) -> Result<()> {
        config.validate()?;
        // i2c-dev has no per-handle clock control; the adapter runs at
        // whatever the device tree set.
        info!(
            "I2C: {} Hz requested, target {:#04x}, timeout {:?}",
            config.speed.hz(),
            config.default_address,
            config.timeout
        );
        self.config = Some(*config);
        Ok(())
    }
}

// i2cdev and gpio-cdev close their files on drop and offer no fallible
// close, so these releases cannot fail.
impl Release for LinuxBus {
    type Error = Infallible;

    fn release(self) -> core::result::Result<(), Infallible> {
        drop(self.dev);
        Ok(())
    }
}

/// The button line, requested as an input.
pub struct LinuxButton {
    pin: CdevPin,
}

impl LinuxButton {
    pub fn open(chip: &str, line: u32, label: &str) -> Result<Self> {
        let mut chip = Chip::new(chip).map_err(|e| Error::resource("GPIO chip", e))?;
        let handle = chip
            .get_line(line)
            .and_then(|l| l.request(LineRequestFlags::INPUT, 0, label))
            .map_err(|e| Error::resource("button GPIO", e))?;
        let pin = CdevPin::new(handle).map_err(|e| Error::resource("button GPIO", e))?;
        debug!("GPIO: line {} requested as {:?}", line, label);
        Ok(Self { pin })
    }
}

impl digital::ErrorType for LinuxButton {
    type Error = <CdevPin as digital::ErrorType>::Error;
}

impl InputPin for LinuxButton {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

impl Release for LinuxButton {
    type Error = Infallible;

    fn release(self) -> core::result::Result<(), Infallible> {
        drop(self.pin);
        Ok(())
    }
}
