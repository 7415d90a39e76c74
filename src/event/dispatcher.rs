//! Event dispatcher - one epoll context, many callback sources.
//!
//! Sources are looked up by descriptor; the dispatcher never owns the
//! descriptors themselves. Callbacks receive the application context
//! explicitly instead of reaching for globals.

use core::ops::ControlFlow;
use core::time::Duration;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, IntoRawFd, RawFd};

use log::{debug, trace};
use nix::errno::Errno;
use nix::sys::epoll::{Epoll, EpollCreateFlags, EpollEvent, EpollFlags, EpollTimeout};

use super::timer::PeriodicTimer;
use crate::bus::Release;
use crate::error::{Error, Result};

/// Most readiness events collected by one wait.
const MAX_EVENTS: usize = 8;

/// Source callback. `Break` stops dispatch for the rest of this step.
pub type Callback<C> = Box<dyn FnMut(&mut C) -> ControlFlow<()>>;

struct Source<C> {
    fd: RawFd,
    interest: EpollFlags,
    callback: Callback<C>,
}

/// Blocking wait-and-dispatch over registered descriptors.
pub struct Dispatcher<C> {
    epoll: Epoll,
    sources: Vec<Source<C>>,
    events: [EpollEvent; MAX_EVENTS],
}

impl<C> Dispatcher<C> {
    /// Allocate the wait context.
    pub fn create() -> Result<Self> {
        let epoll = Epoll::new(EpollCreateFlags::EPOLL_CLOEXEC).map_err(Error::ResourceExhausted)?;
        Ok(Self {
            epoll,
            sources: Vec::new(),
            events: [EpollEvent::empty(); MAX_EVENTS],
        })
    }

    /// Watch `fd` for `interest` and run `callback` when it is ready.
    pub fn register<F>(&mut self, fd: BorrowedFd<'_>, interest: EpollFlags, callback: F) -> Result<()>
    where
        F: FnMut(&mut C) -> ControlFlow<()> + 'static,
    {
        let raw = fd.as_raw_fd();

        // The kernel rejects a live duplicate with EEXIST. If it accepts
        // a number we still track, the old descriptor was closed and the
        // number reused, so the old source is gone.
        self.epoll
            .add(fd, EpollEvent::new(interest, raw as u64))
            .map_err(|source| Error::RegistrationFailed { fd: raw, source })?;
        if let Some(stale) = self.sources.iter().position(|s| s.fd == raw) {
            debug!("Dispatcher: fd {} was closed and reused", raw);
            self.sources.remove(stale);
        }

        debug!("Dispatcher: watching fd {} for {:?}", raw, interest);
        self.sources.push(Source {
            fd: raw,
            interest,
            callback: Box::new(callback),
        });
        Ok(())
    }

    /// Create a timer firing every `period` and register it.
    ///
    /// The caller owns the returned timer and must acknowledge each
    /// firing from inside `callback`.
    pub fn register_periodic_timer<F>(&mut self, period: Duration, callback: F) -> Result<PeriodicTimer>
    where
        F: FnMut(&mut C) -> ControlFlow<()> + 'static,
    {
        let timer = PeriodicTimer::new(period)?;
        self.register(timer.as_fd(), EpollFlags::EPOLLIN, callback)?;
        Ok(timer)
    }

    /// Stop watching `fd`.
    pub fn deregister(&mut self, fd: BorrowedFd<'_>) -> Result<()> {
        let raw = fd.as_raw_fd();
        let Some(index) = self.sources.iter().position(|s| s.fd == raw) else {
            return Err(Error::RegistrationFailed {
                fd: raw,
                source: Errno::ENOENT,
            });
        };

        self.epoll
            .delete(fd)
            .map_err(|source| Error::RegistrationFailed { fd: raw, source })?;
        self.sources.remove(index);
        Ok(())
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Block until at least one source is ready, then run the ready
    /// callbacks in registration order.
    ///
    /// Returns how many callbacks ran. A wait interrupted by a signal
    /// returns `Ok(0)` so the caller can look at its termination flag.
    pub fn step(&mut self, ctx: &mut C) -> Result<usize> {
        let ready = match self.epoll.wait(&mut self.events, EpollTimeout::NONE) {
            Ok(n) => n,
            Err(Errno::EINTR) => {
                trace!("Dispatcher: wait interrupted");
                return Ok(0);
            }
            Err(e) => return Err(Error::io("epoll wait", e)),
        };

        let mut fired = [(-1 as RawFd, EpollFlags::empty()); MAX_EVENTS];
        for (slot, event) in fired.iter_mut().zip(&self.events[..ready]) {
            *slot = (event.data() as RawFd, event.events());
        }
        let fired = &fired[..ready];

        let mut invoked = 0;
        for source in self.sources.iter_mut() {
            let Some((_, events)) = fired.iter().find(|(fd, _)| *fd == source.fd) else {
                continue;
            };
            if !events.intersects(source.interest | EpollFlags::EPOLLERR | EpollFlags::EPOLLHUP) {
                continue;
            }

            invoked += 1;
            if (source.callback)(ctx).is_break() {
                break;
            }
        }
        Ok(invoked)
    }
}

impl<C> Release for Dispatcher<C> {
    type Error = Errno;

    fn release(self) -> core::result::Result<(), Errno> {
        nix::unistd::close(self.epoll.0.into_raw_fd())
    }
}
