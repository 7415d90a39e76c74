//! Unified error type for panelcycle.
//!
//! Every variant is fatal at startup. During steady-state operation the
//! only recoverable failure, a dropped bus transaction, never surfaces
//! here: the byte-transfer adapter logs it and moves on.

use std::os::fd::RawFd;

use nix::errno::Errno;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Top-level error type used across the application.
#[derive(Debug, Error)]
pub enum Error {
    // Wait context
    /// The OS multiplexing primitive could not be created.
    #[error("wait context could not be created: {0}")]
    ResourceExhausted(#[source] Errno),

    /// A descriptor could not be added to the wait context.
    #[error("descriptor {fd} could not be registered: {source}")]
    RegistrationFailed {
        fd: RawFd,
        #[source]
        source: Errno,
    },

    // Collaborators
    /// A bus, GPIO or timer handle could not be opened.
    #[error("{what} could not be opened: {reason}")]
    Resource { what: &'static str, reason: String },

    /// The bus rejected its configuration.
    #[error("bus configuration rejected: {0}")]
    Config(String),

    // Steady state
    /// A single read, write or timer consumption failed.
    #[error("{what} failed: {reason}")]
    Io { what: &'static str, reason: String },
}

impl Error {
    /// Build a `Resource` error from any collaborator error.
    pub fn resource(what: &'static str, err: impl core::fmt::Debug) -> Self {
        Error::Resource {
            what,
            reason: format!("{err:?}"),
        }
    }

    /// Build an `Io` error from any collaborator error.
    pub fn io(what: &'static str, err: impl core::fmt::Debug) -> Self {
        Error::Io {
            what,
            reason: format!("{err:?}"),
        }
    }
}
