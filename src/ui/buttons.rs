//! Button polling with level-compare debouncing.
//!
//! Button 1 is active-low with a pull-up. A periodic timer fires every
//! millisecond; each firing we read the line and compare it with the
//! level we saw last time. Only a high → low change counts as a press,
//! so a held button yields one press, not one per poll, and the release
//! edge is absorbed silently.

use embedded_hal::digital::InputPin;

use super::Press;
use crate::bus::{read_level, Level};
use crate::error::{Error, Result};
use crate::event::TimerSource;

/// Last observed level of the button line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    state: Level,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    /// Assume the button is released at startup.
    pub const fn new() -> Self {
        Self { state: Level::High }
    }

    pub fn state(&self) -> Level {
        self.state
    }

    /// Feed one sample; returns a press on a high → low transition.
    pub fn sample(&mut self, level: Level) -> Option<Press> {
        let press = (level != self.state && level == Level::Low).then_some(Press);
        self.state = level;
        press
    }
}

/// One poll tick: acknowledge the timer, sample the pin, debounce.
///
/// Both failures are fatal to the caller: a timer that cannot be
/// acknowledged stays ready forever, and an unreadable input means the
/// button state can no longer be trusted.
pub fn poll<T, P>(timer: &T, pin: &mut P, debouncer: &mut Debouncer) -> Result<Option<Press>>
where
    T: TimerSource,
    P: InputPin,
{
    timer.consume()?;
    let level = read_level(pin).map_err(|e| Error::io("button GPIO read", e))?;
    Ok(debouncer.sample(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::cell::Cell;

    struct FakeTimer {
        fail: bool,
        consumed: Cell<u32>,
    }

    impl TimerSource for FakeTimer {
        fn consume(&self) -> Result<u64> {
            if self.fail {
                return Err(Error::io("timer consume", "EBADF"));
            }
            self.consumed.set(self.consumed.get() + 1);
            Ok(1)
        }
    }

    fn timer() -> FakeTimer {
        FakeTimer {
            fail: false,
            consumed: Cell::new(0),
        }
    }

    struct FakePin {
        level: core::result::Result<bool, ErrorKind>,
        reads: u32,
    }

    impl ErrorType for FakePin {
        type Error = ErrorKind;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> core::result::Result<bool, ErrorKind> {
            self.reads += 1;
            self.level
        }

        fn is_low(&mut self) -> core::result::Result<bool, ErrorKind> {
            self.is_high().map(|h| !h)
        }
    }

    fn presses(levels: &[Level]) -> usize {
        let mut d = Debouncer::new();
        levels.iter().filter_map(|&l| d.sample(l)).count()
    }

    #[test]
    fn one_press_per_falling_edge() {
        use Level::*;
        assert_eq!(presses(&[High, High, Low, Low, High]), 1);
    }

    #[test]
    fn release_edge_is_absorbed() {
        let mut d = Debouncer::new();
        assert_eq!(d.sample(Level::Low), Some(Press));
        assert_eq!(d.sample(Level::High), None);
        assert_eq!(d.state(), Level::High);
    }

    #[test]
    fn held_button_presses_once() {
        assert_eq!(presses(&[Level::Low; 50]), 1);
    }

    #[test]
    fn idle_line_never_presses() {
        assert_eq!(presses(&[Level::High; 50]), 0);
    }

    #[test]
    fn poll_acknowledges_then_samples() {
        let t = timer();
        let mut pin = FakePin {
            level: Ok(false),
            reads: 0,
        };
        let mut d = Debouncer::new();

        assert_eq!(poll(&t, &mut pin, &mut d).unwrap(), Some(Press));
        assert_eq!(poll(&t, &mut pin, &mut d).unwrap(), None);
        assert_eq!(t.consumed.get(), 2);
        assert_eq!(pin.reads, 2);
    }

    #[test]
    fn timer_failure_skips_read() {
        let t = FakeTimer {
            fail: true,
            consumed: Cell::new(0),
        };
        let mut pin = FakePin {
            level: Ok(false),
            reads: 0,
        };
        let mut d = Debouncer::new();

        assert!(matches!(poll(&t, &mut pin, &mut d), Err(Error::Io { .. })));
        assert_eq!(pin.reads, 0);
        assert_eq!(d.state(), Level::High);
    }

    #[test]
    fn read_failure_keeps_state() {
        let t = timer();
        let mut pin = FakePin {
            level: Err(ErrorKind::Other),
            reads: 0,
        };
        let mut d = Debouncer::new();

        assert!(matches!(poll(&t, &mut pin, &mut d), Err(Error::Io { .. })));
        assert_eq!(d.state(), Level::High);
    }
}
