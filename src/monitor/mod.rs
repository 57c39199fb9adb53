//! Recurring-poll monitoring of a single HTTP endpoint.
//!
//! This module provides:
//! - The poll loop itself ([`Monitor`])
//! - Observed responses and change detection ([`Snapshot`])
//! - Fatal loop errors ([`MonitorError`])
//!
//! Each cycle fires `request`, polls the endpoint, compares the response
//! against the previous snapshot, fires `change` or `no_change`, then
//! sleeps for the configured interval.

mod error;
mod poll;
mod snapshot;


pub use error::MonitorError;
pub use poll::Monitor;
pub use snapshot::Snapshot;
