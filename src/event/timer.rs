//! Periodic timer descriptor.
//!
//! Re-arming is the kernel's job: the timerfd is created with an
//! interval and keeps firing until it is closed. Every firing must be
//! acknowledged by reading the descriptor, otherwise epoll keeps
//! reporting it ready.

use core::mem::ManuallyDrop;
use core::time::Duration;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};

use nix::errno::Errno;
use nix::sys::time::TimeSpec;
use nix::sys::timerfd::{ClockId, Expiration, TimerFd, TimerFlags, TimerSetTimeFlags};

use crate::bus::Release;
use crate::error::{Error, Result};

/// A source of timer firings that must be acknowledged.
pub trait TimerSource {
    /// Acknowledge pending firings, returning how many there were.
    fn consume(&self) -> Result<u64>;
}

/// Monotonic-clock timerfd armed with a fixed interval.
#[derive(Debug)]
pub struct PeriodicTimer {
    fd: TimerFd,
    period: Duration,
}

impl PeriodicTimer {
    /// Create a non-blocking timer and arm it to fire every `period`.
    pub fn new(period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(Error::Resource {
                what: "periodic timer",
                reason: "a zero period would disarm the timer".into(),
            });
        }

        let fd = TimerFd::new(
            ClockId::CLOCK_MONOTONIC,
            TimerFlags::TFD_NONBLOCK | TimerFlags::TFD_CLOEXEC,
        )
        .map_err(|e| Error::resource("periodic timer", e))?;

        fd.set(
            Expiration::Interval(TimeSpec::from_duration(period)),
            TimerSetTimeFlags::empty(),
        )
        .map_err(|e| Error::resource("periodic timer", e))?;

        Ok(Self { fd, period })
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TimerSource for PeriodicTimer {
    fn consume(&self) -> Result<u64> {
        let mut expirations = [0u8; 8];
        let read = nix::unistd::read(self.fd.as_fd().as_raw_fd(), &mut expirations)
            .map_err(|e| Error::io("timer consume", e))?;
        if read != expirations.len() {
            return Err(Error::io("timer consume", format!("short read of {read} bytes")));
        }
        Ok(u64::from_ne_bytes(expirations))
    }
}

impl AsFd for PeriodicTimer {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl Release for PeriodicTimer {
    type Error = Errno;

    /// Closing the descriptor also drops it from any wait context.
    fn release(self) -> core::result::Result<(), Errno> {
        let fd = ManuallyDrop::new(self.fd);
        nix::unistd::close(fd.as_fd().as_raw_fd())
    }
}
