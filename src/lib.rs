//! apiwatch: HTTP endpoint change monitor
//!
//! A library for polling a single HTTP endpoint at a fixed interval
//! and dispatching events to registered callbacks when the response
//! changes.
//!
//! # Overview
//!
//! The heart of the crate is [`monitor::Monitor`], which repeatedly
//! sends the same request through a [`transport::Transport`] and
//! compares each response with the previous one. Callbacks registered
//! on the monitor fire before each poll (`request`), when the response
//! differs from the last one (`change`), and when it does not
//! (`no_change`).
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use apiwatch::monitor::Monitor;
//! use apiwatch::transport::{ReqwestTransport, RequestSpec};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = RequestSpec::get("https://api.example.com/status".parse()?);
//! let mut monitor = Monitor::new(
//!     ReqwestTransport::new(),
//!     spec,
//!     Duration::from_secs(60),
//! )?;
//!
//! monitor.on_change(|previous, current| {
//!     println!("{} -> {}", previous.status, current.status);
//!     Ok(())
//! });
//!
//! monitor.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod event;
pub mod monitor;
pub mod time;
pub mod transport;
