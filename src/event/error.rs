//! Error types for callback registration.

use thiserror::Error;

use super::EventKind;

/// Boxed error returned by a user callback.
///
/// A callback failure is fatal to the poll loop; it surfaces as
/// [`MonitorError::Callback`](crate::monitor::MonitorError::Callback)
/// with the originating event kind attached.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for callback registration.
///
/// Registration either succeeds or leaves the registry untouched;
/// these errors indicate a programming mistake, not a runtime fault.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The event name does not resolve to any known event.
    #[error("'{name}' is not a valid event to listen for")]
    UnknownEvent {
        /// The name as given by the caller.
        name: String,
    },

    /// The callback shape does not match the event.
    ///
    /// Only `change` callbacks take snapshot parameters.
    #[error("Expected the {kind} callback to take {expected} parameters, got {got}")]
    ArityMismatch {
        /// The event the caller tried to bind.
        kind: EventKind,
        /// Parameter count the event requires.
        expected: usize,
        /// Parameter count of the supplied callback.
        got: usize,
    },
}
