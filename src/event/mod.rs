//! Single-threaded event loop plumbing.
//!
//! The loop has exactly one suspension point, [`Dispatcher::step`].
//! Everything else (rendering, bus writes, settle delays) runs to
//! completion between two waits, so nothing here needs a lock.
//!
//! Cancellation is polled: the signal handler and fatal callbacks only
//! set a [`TerminationFlag`], and the main loop reads it once per
//! iteration.

pub mod dispatcher;
pub mod timer;

pub use dispatcher::{Callback, Dispatcher};
pub use timer::{PeriodicTimer, TimerSource};

use core::ffi::c_int;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::SigId;

use crate::error::{Error, Result};

pub use signal_hook::consts::{SIGINT, SIGTERM};

/// Process-wide "please stop" flag.
///
/// Starts false and is set at most once; there is no way to clear it.
#[derive(Clone, Debug, Default)]
pub struct TerminationFlag(Arc<AtomicBool>);

impl TerminationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the main loop to stop after the current iteration.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the flag when `signal` arrives.
    ///
    /// The installed handler performs a single atomic store and nothing
    /// else; logging or I/O there would not be async-signal-safe.
    pub fn register_signal(&self, signal: c_int) -> Result<SigId> {
        signal_hook::flag::register(signal, Arc::clone(&self.0))
            .map_err(|e| Error::resource("signal handler", e))
    }

    /// Register every signal in `signals`, stopping at the first failure.
    ///
    /// A process that cannot be told to stop must not start, so a failure
    /// also requests termination.
    pub fn register_signals(&self, signals: &[c_int]) -> Result<()> {
        for &signal in signals {
            if let Err(e) = self.register_signal(signal) {
                self.request();
                return Err(e);
            }
        }
        Ok(())
    }
}
