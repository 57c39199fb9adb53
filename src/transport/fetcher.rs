//! HTTP request/response types and the transport trait.

use std::time::Duration;

use super::TransportError;

/// Everything needed to issue one poll.
///
/// Built once at startup and reused for every cycle. Method and headers
/// use the `http` crate's types.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: http::Method,
    pub url: url::Url,
    /// Headers sent verbatim on every poll.
    pub headers: http::HeaderMap,
    /// Query pairs appended to the URL in the order given.
    pub query: Vec<(String, String)>,
    /// JSON document sent as the request body.
    pub body: Option<serde_json::Value>,
    /// Overrides the client-level timeout when set.
    pub timeout: Option<Duration>,
}

impl RequestSpec {
    /// Starts a spec with only a method and URL; everything else is empty.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Shorthand for [`Self::new`] with GET.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Appends one header value.
    ///
    /// Values already stored under the same name are kept; HTTP allows
    /// a name to repeat.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Swaps in a whole header map, discarding anything added before.
    #[must_use]
    pub fn with_headers(mut self, headers: http::HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Adds one query pair. Order is preserved and duplicate keys are
    /// allowed.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Caps how long this request may take.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// One polled response, body fully buffered.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: http::StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Builds a response from its parts.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }
}

/// How the monitor talks HTTP.
///
/// The poll loop only ever sees this trait, so tests can script
/// responses without opening sockets and the reqwest backing stays
/// swappable.
///
/// A non-success status is still `Ok`: the status code is part of the
/// observed state, not a transport failure.
///
/// # Example
///
/// ```
/// use apiwatch::transport::{RawResponse, RequestSpec, Transport, TransportError};
///
/// /// Replies 204 to every poll.
/// struct QuietTransport;
///
/// impl Transport for QuietTransport {
///     async fn fetch(&self, _spec: &RequestSpec) -> Result<RawResponse, TransportError> {
///         Ok(RawResponse::new(
///             http::StatusCode::NO_CONTENT,
///             http::HeaderMap::new(),
///             Vec::new(),
///         ))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Issues one poll and buffers the whole response.
    ///
    /// # Errors
    ///
    /// Connection failures come back as [`TransportError::Connection`]
    /// and an elapsed deadline as [`TransportError::Timeout`]. A URL the
    /// client refuses to send to is [`TransportError::InvalidUrl`].
    fn fetch(
        &self,
        spec: &RequestSpec,
    ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>> + Send;
}
