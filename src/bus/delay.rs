//! Timing adapter - protocol delay requests to real-time pauses.
//!
//! The display-command layer asks for three fixed delay quanta. It may
//! also try to drive GPIO lines for bit-banged transports; on hardware
//! I2C none of those lines exist, so every line request is answered
//! [`Ack::NotApplicable`] and nothing happens.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use log::trace;

use super::Level;

/// Lines a bit-banged or parallel transport would toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpioLine {
    SpiClock,
    SpiData,
    ChipSelect,
    DataCommand,
    Reset,
    /// Parallel bus data line D0-D7.
    Data(u8),
    Enable,
    I2cClock,
    I2cData,
}

/// Messages accepted by [`Timing::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayMsg {
    Init,
    Milli,
    TenMicro,
    HundredNano,
    Gpio(GpioLine, Level),
}

impl DelayMsg {
    /// Pause requested by this message, if any.
    pub fn duration(self) -> Option<Duration> {
        match self {
            DelayMsg::Milli => Some(Duration::from_millis(1)),
            DelayMsg::TenMicro => Some(Duration::from_micros(10)),
            DelayMsg::HundredNano => Some(Duration::from_nanos(100)),
            DelayMsg::Init | DelayMsg::Gpio(..) => None,
        }
    }
}

/// Outcome of a timing/GPIO message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ack {
    Done,
    /// The message names a transport feature this bus does not have.
    NotApplicable,
}

/// Something that can block the calling thread.
pub trait Sleep {
    fn sleep(&mut self, duration: Duration);
}

/// Blocking sleep on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Delay provider for the display-command layer.
#[derive(Debug, Default)]
pub struct Timing<S = ThreadSleep> {
    sleeper: S,
}

impl Timing<ThreadSleep> {
    pub fn new() -> Self {
        Self {
            sleeper: ThreadSleep,
        }
    }
}

impl<S: Sleep> Timing<S> {
    pub fn with_sleeper(sleeper: S) -> Self {
        Self { sleeper }
    }

    /// Handle one protocol message.
    pub fn handle(&mut self, msg: DelayMsg) -> Ack {
        match msg {
            DelayMsg::Gpio(line, level) => {
                trace!("Timing: {:?} -> {:?} ignored on hardware I2C", line, level);
                Ack::NotApplicable
            }
            other => {
                if let Some(duration) = other.duration() {
                    self.sleeper.sleep(duration);
                }
                Ack::Done
            }
        }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }
}

impl<S: Sleep> DelayNs for Timing<S> {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeper.sleep(Duration::from_nanos(u64::from(ns)));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records requested pauses instead of sleeping.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSleep {
        pub(crate) pauses: Vec<Duration>,
    }

    impl Sleep for RecordingSleep {
        fn sleep(&mut self, duration: Duration) {
            self.pauses.push(duration);
        }
    }

    fn timing() -> Timing<RecordingSleep> {
        Timing::with_sleeper(RecordingSleep::default())
    }

    #[test]
    fn delay_kinds_map_to_fixed_durations() {
        let mut t = timing();
        assert_eq!(t.handle(DelayMsg::Milli), Ack::Done);
        assert_eq!(t.handle(DelayMsg::TenMicro), Ack::Done);
        assert_eq!(t.handle(DelayMsg::HundredNano), Ack::Done);
        assert_eq!(
            t.sleeper().pauses,
            [
                Duration::from_millis(1),
                Duration::from_micros(10),
                Duration::from_nanos(100),
            ]
        );
    }

    #[test]
    fn init_does_not_sleep() {
        let mut t = timing();
        assert_eq!(t.handle(DelayMsg::Init), Ack::Done);
        assert!(t.sleeper().pauses.is_empty());
    }

    #[test]
    fn gpio_lines_not_applicable() {
        let mut t = timing();
        let lines = [
            GpioLine::SpiClock,
            GpioLine::SpiData,
            GpioLine::ChipSelect,
            GpioLine::DataCommand,
            GpioLine::Reset,
            GpioLine::Data(3),
            GpioLine::Enable,
            GpioLine::I2cClock,
            GpioLine::I2cData,
        ];
        for line in lines {
            assert_eq!(t.handle(DelayMsg::Gpio(line, Level::Low)), Ack::NotApplicable);
        }
        assert!(t.sleeper().pauses.is_empty());
    }

    #[test]
    fn delay_ns_passes_through() {
        let mut t = timing();
        t.delay_us(300);
        assert_eq!(t.sleeper().pauses, [Duration::from_micros(300)]);
    }
}
