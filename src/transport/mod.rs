//! HTTP plumbing for the monitor.
//!
//! [`RequestSpec`] describes the request sent on every cycle and
//! [`RawResponse`] is what comes back. The [`Transport`] trait sits
//! between the two so tests can script responses; [`ReqwestTransport`]
//! is the implementation the binary runs with.

mod client;
mod error;
mod fetcher;


pub use client::ReqwestTransport;
pub use error::TransportError;
pub use fetcher::{RawResponse, RequestSpec, Transport};
