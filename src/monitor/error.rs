//! Error types for the monitor layer.

use crate::event::{CallbackError, EventKind};
use crate::transport::TransportError;
use thiserror::Error;

/// Error type for monitor construction and execution.
///
/// Any error raised while the loop is running is fatal: the monitor
/// stops and returns it to the caller.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The poll interval is zero.
    #[error("Poll interval must be greater than zero")]
    InvalidInterval,

    /// The poll request failed.
    #[error("Poll request failed: {0}")]
    Transport(#[from] TransportError),

    /// A user callback returned an error.
    #[error("The {event} callback failed: {source}")]
    Callback {
        /// The event whose callback failed.
        event: EventKind,
        /// The error the callback returned.
        source: CallbackError,
    },
}
