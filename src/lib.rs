//! panelcycle - a button-driven SSD1306 OLED demo for Linux boards.
//!
//! The library holds everything that can be exercised on a host: the
//! byte-transfer and timing adapters under the display driver, the
//! epoll dispatcher, button debouncing and the screen cycle.
//!
//! Usage: `cargo test`
//!
//! The device binary (`src/main.rs`) additionally needs the `linux`
//! feature, which pulls in the `/dev/i2c-*` and GPIO character-device
//! backends from [`linux`].

pub mod app;
pub mod bus;
pub mod config;
pub mod error;
pub mod event;
pub mod ui;

#[cfg(feature = "linux")]
pub mod linux;

pub use app::App;
pub use error::{Error, Result};
pub use ui::ScreenId;
