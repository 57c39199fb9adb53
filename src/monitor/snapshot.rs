//! Observed response snapshots and change detection.

use std::time::SystemTime;

use serde_json::Value;

use crate::transport::RawResponse;

/// One successfully observed response.
///
/// A snapshot keeps the raw response together with its decoded JSON
/// payload (when the body parses as JSON) and the time it was received.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// HTTP status code of the response.
    pub status: http::StatusCode,
    /// Response headers.
    pub headers: http::HeaderMap,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Body decoded as JSON, if it parses.
    pub payload: Option<Value>,
    /// When the response was received.
    pub received_at: SystemTime,
}

impl Snapshot {
    /// Builds a snapshot from a raw response.
    ///
    /// The body is decoded as JSON on a best-effort basis; a body that
    /// is not valid JSON simply leaves `payload` empty.
    #[must_use]
    pub fn new(response: RawResponse, received_at: SystemTime) -> Self {
        let payload = serde_json::from_slice(&response.body).ok();
        Self {
            status: response.status,
            headers: response.headers,
            body: response.body,
            payload,
            received_at,
        }
    }

    /// True for 2xx responses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as text, when it happens to be UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Returns true if this snapshot observed a different response.
    ///
    /// Two snapshots differ when any of the decoded payload, the status
    /// code, or the raw body differs. Headers and the received timestamp
    /// are metadata and never participate in the comparison.
    #[must_use]
    pub fn differs_from(&self, other: &Self) -> bool {
        self.payload != other.payload || self.status != other.status || self.body != other.body
    }
}
