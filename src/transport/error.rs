//! Error types for transport operations.

use thiserror::Error;

/// Error type for a failed poll request.
///
/// An HTTP response with a non-success status is *not* an error at this
/// layer; status codes are data the monitor compares. These variants cover
/// the cases where no response was obtained at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never completed: DNS failure, refused connection,
    /// broken body stream, or any other network-level fault.
    #[error("Network failure: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No response arrived within the configured timeout.
    #[error("Timed out waiting for a response")]
    Timeout,

    /// The request could not even be built, usually because the URL uses
    /// a scheme the client does not speak.
    #[error("Request URL rejected: {0}")]
    InvalidUrl(String),
}
