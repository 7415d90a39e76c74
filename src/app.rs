//! Application context and main loop.
//!
//! Everything the loop touches lives in one explicitly constructed
//! [`Context`]: the display, the button, its poll timer, the debounce
//! and screen state, and the termination flag. The dispatcher hands the
//! context to each callback; nothing is global.
//!
//! Handles are acquired in the order wait context → bus/display →
//! button GPIO → poll timer, and [`App::shutdown`] releases them in the
//! reverse order, each exactly once.

use core::fmt::Debug;
use core::ops::ControlFlow;
use core::time::Duration;
use std::os::fd::AsFd;

use embedded_graphics::draw_target::DrawTarget;
use embedded_hal::digital::InputPin;
use log::{debug, error, info, warn};

use crate::bus::Release;
use crate::error::Result;
use crate::event::{Dispatcher, PeriodicTimer, TerminationFlag};
use crate::ui::buttons::{self, Debouncer};
use crate::ui::display::{self, Surface};
use crate::ui::input_logic::next_screen;
use crate::ui::ScreenId;

/// State shared between the main loop and event callbacks.
pub struct Context<D, P> {
    surface: Option<D>,
    button: Option<P>,
    poll_timer: Option<PeriodicTimer>,
    debouncer: Debouncer,
    screen: ScreenId,
    presses: u32,
    termination: TerminationFlag,
}

impl<D, P> Context<D, P> {
    fn new(termination: TerminationFlag) -> Self {
        Self {
            surface: None,
            button: None,
            poll_timer: None,
            debouncer: Debouncer::new(),
            screen: ScreenId::default(),
            presses: 0,
            termination,
        }
    }

    fn on_press(&mut self) {
        self.screen = next_screen(self.screen);
        self.presses = self.presses.wrapping_add(1);
        info!("Button: press -> {:?}", self.screen);
    }
}

/// Poll-timer callback: debounce the button, advance the screen.
fn on_button_timer<D, P: InputPin>(ctx: &mut Context<D, P>) -> ControlFlow<()> {
    let (Some(timer), Some(pin)) = (ctx.poll_timer.as_ref(), ctx.button.as_mut()) else {
        return ControlFlow::Continue(());
    };

    match buttons::poll(timer, pin, &mut ctx.debouncer) {
        Ok(Some(_)) => {
            ctx.on_press();
            ControlFlow::Continue(())
        }
        Ok(None) => ControlFlow::Continue(()),
        Err(e) => {
            error!("Button: {}", e);
            ctx.termination.request();
            ControlFlow::Break(())
        }
    }
}

/// The display demo: one dispatcher, one context.
pub struct App<D, P> {
    dispatcher: Option<Dispatcher<Context<D, P>>>,
    ctx: Context<D, P>,
}

impl<D, P> App<D, P>
where
    D: Surface + Release + 'static,
    <D as DrawTarget>::Error: Debug,
    P: InputPin + Release + 'static,
{
    /// Allocate the wait context.
    pub fn new(termination: TerminationFlag) -> Result<Self> {
        let dispatcher = Dispatcher::create()?;
        Ok(Self {
            dispatcher: Some(dispatcher),
            ctx: Context::new(termination),
        })
    }

    /// Hand over the initialised display (and the bus beneath it).
    pub fn attach_display(&mut self, surface: D) {
        self.ctx.surface = Some(surface);
    }

    /// Hand over the button input.
    pub fn attach_button(&mut self, pin: P) {
        self.ctx.button = Some(pin);
    }

    /// Start polling the button every `period`.
    pub fn arm_button_poll(&mut self, period: Duration) -> Result<()> {
        let Some(dispatcher) = self.dispatcher.as_mut() else {
            return Ok(());
        };
        let timer = dispatcher.register_periodic_timer(period, on_button_timer::<D, P>)?;
        debug!("Button: polling every {:?}", period);
        self.ctx.poll_timer = Some(timer);
        Ok(())
    }

    /// Render the current screen, then block until the next event.
    ///
    /// Returns false once termination has been requested.
    pub fn iterate(&mut self) -> bool {
        if self.ctx.termination.is_requested() {
            return false;
        }
        let Some(dispatcher) = self.dispatcher.as_mut() else {
            return false;
        };

        if let Some(surface) = self.ctx.surface.as_mut() {
            display::render(surface, self.ctx.screen);
        }

        if let Err(e) = dispatcher.step(&mut self.ctx) {
            error!("Dispatcher: {}", e);
            self.ctx.termination.request();
        }
        !self.ctx.termination.is_requested()
    }

    /// Run until termination is requested.
    ///
    /// The flag is checked once per iteration, so a stop takes effect
    /// after at most one render-plus-wait cycle.
    pub fn run(&mut self) {
        if let Some(surface) = self.ctx.surface.as_mut() {
            display::clear(surface);
        }

        while self.iterate() {}

        if let Some(surface) = self.ctx.surface.as_mut() {
            display::clear(surface);
        }
    }

    /// Release every handle still held, newest first.
    ///
    /// Safe to call more than once; already released handles are
    /// skipped. Release failures are logged and never stop the rest.
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.ctx.poll_timer.take() {
            if let Some(dispatcher) = self.dispatcher.as_mut() {
                if let Err(e) = dispatcher.deregister(timer.as_fd()) {
                    warn!("Shutdown: {}", e);
                }
            }
            release("button poll timer", timer);
        }
        if let Some(pin) = self.ctx.button.take() {
            release("button GPIO", pin);
        }
        if let Some(surface) = self.ctx.surface.take() {
            release("I2C bus", surface);
        }
        if let Some(dispatcher) = self.dispatcher.take() {
            release("wait context", dispatcher);
        }
    }

    pub fn screen(&self) -> ScreenId {
        self.ctx.screen
    }

    /// Presses recognised since startup.
    pub fn presses(&self) -> u32 {
        self.ctx.presses
    }

    pub fn termination(&self) -> &TerminationFlag {
        &self.ctx.termination
    }

    pub fn surface(&self) -> Option<&D> {
        self.ctx.surface.as_ref()
    }
}

fn release<R: Release>(what: &str, handle: R) {
    match handle.release() {
        Ok(()) => debug!("Shutdown: {} released", what),
        Err(e) => warn!("Shutdown: releasing {} failed: {:?}", what, e),
    }
}
