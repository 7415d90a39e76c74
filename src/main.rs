//! panelcycle - SSD1306 OLED demo driven by one push button.
//!
//! Opens the I2C adapter and the button GPIO, then cycles Logo → Font →
//! Graphics on every press until SIGINT or SIGTERM.

use std::thread;

use log::{error, info};

use panelcycle::app::App;
use panelcycle::bus::interface::I2cLink;
use panelcycle::bus::{BusConfig, ConfigureBus};
use panelcycle::config::*;
use panelcycle::error::Result;
use panelcycle::event::{TerminationFlag, SIGINT, SIGTERM};
use panelcycle::linux::{LinuxBus, LinuxButton};
use panelcycle::ui::display::{self, Display};

type DemoApp = App<Display<LinuxBus>, LinuxButton>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("panelcycle {} starting", env!("CARGO_PKG_VERSION"));
    info!("Press the button to move to the next screen, Ctrl+C to exit");

    let termination = TerminationFlag::new();
    match termination.register_signals(&[SIGINT, SIGTERM]) {
        Ok(()) => serve(termination),
        Err(e) => error!("Signals: {}", e),
    }

    info!("*** Terminated ***");
}

/// Allocate the wait context, bring the hardware up, run, shut down.
fn serve(termination: TerminationFlag) {
    let mut app = match DemoApp::new(termination) {
        Ok(app) => app,
        Err(e) => {
            error!("Wait context: {}", e);
            return;
        }
    };

    match bring_up(&mut app) {
        Ok(()) => app.run(),
        Err(e) => error!("Startup failed: {}", e),
    }
    app.shutdown();
}

/// Acquire the bus, display, button and poll timer, in that order.
fn bring_up(app: &mut DemoApp) -> Result<()> {
    let mut bus = LinuxBus::open(I2C_BUS_PATH)?;
    bus.configure(&BusConfig {
        speed: I2C_BUS_SPEED,
        timeout: I2C_TIMEOUT,
        default_address: I2C_ADDR_OLED,
    })?;

    // The panel needs time after power-on before it accepts commands.
    thread::sleep(POWER_UP_DELAY);

    let surface = display::init(I2cLink::new(bus, I2C_ADDR_OLED))?;
    app.attach_display(surface);
    info!("Display: ready");

    let button = LinuxButton::open(BUTTON_GPIO_CHIP, BUTTON_GPIO_LINE, BUTTON_GPIO_LABEL)?;
    app.attach_button(button);

    app.arm_button_poll(BUTTON_POLL_PERIOD)?;
    info!("Button: ready");
    Ok(())
}
