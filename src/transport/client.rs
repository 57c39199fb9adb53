//! Live transport backed by reqwest.

use super::{RawResponse, RequestSpec, Transport, TransportError};

/// Transport over a real `reqwest::Client`.
///
/// The wrapped client is shared and pooled, so repeated polls against
/// the same endpoint reuse connections. [`Self::new`] gives stock
/// behaviour; a client carrying proxy, TLS, or redirect settings can be
/// converted with `From`.
///
/// # Example
///
/// ```no_run
/// use apiwatch::transport::{ReqwestTransport, RequestSpec, Transport};
///
/// # async fn poll_once() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new();
/// let spec = RequestSpec::get("https://api.example.com/status".parse()?);
///
/// let response = transport.fetch(&spec).await?;
/// println!("{} ({} bytes)", response.status, response.body.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport over a stock client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

fn map_send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidUrl(e.to_string())
    } else {
        TransportError::Connection(Box::new(e))
    }
}

impl Transport for ReqwestTransport {
    async fn fetch(&self, spec: &RequestSpec) -> Result<RawResponse, TransportError> {
        let mut builder = self.inner.request(spec.method.clone(), spec.url.as_str());

        for (name, value) in &spec.headers {
            builder = builder.header(name, value);
        }
        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            builder = builder.json(body);
        }
        // Per-request timeout overrides the client default
        if let Some(timeout) = spec.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        // A non-2xx status is still a valid poll result; the body read
        // can fail the same ways the send can.
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_send_error)?.to_vec();

        Ok(RawResponse::new(status, headers, body))
    }
}
