//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default HTTP method for poll requests.
pub const METHOD: &str = "GET";

/// Default poll interval in seconds.
pub const INTERVAL_SECS: f64 = 60.0;

/// Whether HTTP redirects are followed by default.
pub const FOLLOW_REDIRECTS: bool = true;

/// Whether TLS certificates are verified by default.
pub const VERIFY_TLS: bool = true;
