//! Application-wide constants and compile-time configuration.
//!
//! All device paths, bus parameters, and timing values live here so
//! they can be tuned in one place.

use core::time::Duration;

use crate::bus::BusSpeed;

// I2C bus

/// Character device of the I2C bus the OLED hangs off (ISU2 on the
/// starter kit).
pub const I2C_BUS_PATH: &str = "/dev/i2c-2";

/// 7-bit address of the SSD1306 controller.
pub const I2C_ADDR_OLED: u8 = 0x3C;

/// Bus clock. The panel is happy at standard mode.
pub const I2C_BUS_SPEED: BusSpeed = BusSpeed::Standard;

/// Per-transfer bus timeout.
pub const I2C_TIMEOUT: Duration = Duration::from_millis(100);

/// Largest transaction the display-command layer ever emits between
/// START and END. The transfer buffer is sized to exactly this.
pub const TRANSFER_CAPACITY: usize = 32;

/// Settle time before every bus write (µs). The controller drops
/// back-to-back transfers without it.
pub const I2C_SETTLE_DELAY_US: u32 = 300;

// Display

/// Panel geometry (SSD1306 128×64 "noname").
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Wait after power-up before the first controller command.
pub const POWER_UP_DELAY: Duration = Duration::from_secs(1);

// Button
//
//   Button 1 → gpiochip0 line 12 (active-low, external pull-up)

/// GPIO character device carrying the button line.
pub const BUTTON_GPIO_CHIP: &str = "/dev/gpiochip0";

/// Line offset of button 1 on `BUTTON_GPIO_CHIP`.
pub const BUTTON_GPIO_LINE: u32 = 12;

/// Consumer label shown in `gpioinfo` for the requested line.
pub const BUTTON_GPIO_LABEL: &str = "panelcycle-button1";

/// Button poll period. Short enough to feel instant, long enough to
/// ride out contact bounce.
pub const BUTTON_POLL_PERIOD: Duration = Duration::from_millis(1);
