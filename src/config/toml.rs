//! On-disk configuration, one TOML table per concern.
//!
//! `[request]` describes the poll itself and `[monitor]` its cadence; the
//! `[client]` table tunes the underlying HTTP client. Unknown keys are
//! rejected so a typo surfaces as a parse error instead of a silently
//! ignored setting.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// The deserialized watch file.
///
/// Every table and every key inside one may be omitted; the merge with the
/// command line happens later, in [`WatchConfig`](super::WatchConfig).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// What to poll and how to shape the request
    #[serde(default)]
    pub request: RequestTable,

    /// Poll cadence
    #[serde(default)]
    pub monitor: MonitorTable,

    /// HTTP client behaviour
    #[serde(default)]
    pub client: ClientTable,
}

/// Keys under `[request]`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestTable {
    /// Address to poll
    pub url: Option<String>,

    /// HTTP method, `GET` when omitted
    pub method: Option<String>,

    /// Extra request headers, one key per header name
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Query parameters, sent in key order
    #[serde(default)]
    pub query: BTreeMap<String, String>,

    /// Token sent as `Authorization: Bearer <token>`
    pub bearer: Option<String>,

    /// JSON document sent as the request body
    pub body: Option<String>,

    /// Seconds before a poll request is abandoned
    pub timeout: Option<u64>,
}

/// Keys under `[monitor]`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorTable {
    /// Seconds between polls; fractions are accepted
    pub interval: Option<f64>,
}

/// Keys under `[client]`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientTable {
    /// Whether redirects are followed, on by default
    pub follow_redirects: Option<bool>,

    /// Whether TLS certificates are checked, on by default
    pub verify_tls: Option<bool>,

    /// Route every poll request through this proxy URL
    pub proxy: Option<String>,
}

impl TomlConfig {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] when the file cannot be read, otherwise
    /// whatever [`parse`](Self::parse) reports.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }

    /// Parses a TOML document already held in memory.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] when the document does not deserialize.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Returns the commented starter configuration, ready to write to disk.
#[must_use]
pub fn config_template() -> String {
    r#"# apiwatch configuration file

[request]
# Address to poll (required)
# url = "https://api.example.com/status"

# HTTP method, GET when omitted
# method = "GET"

# Sent as 'Authorization: Bearer <token>'
# bearer = "dev-token-1"

# JSON body included in every poll
# body = '{"scope": "status"}'

# Give up on a poll after this many seconds
# timeout = 30

# Extra request headers
# [request.headers]
# X-Api-Key = "abc123"

# Query string, sent in key order
# [request.query]
# page = "1"

[monitor]
# Seconds between polls (fractions allowed)
interval = 60.0

[client]
# Follow redirects (on by default)
# follow_redirects = true

# Check TLS certificates (on by default)
# verify_tls = false

# Route polls through a proxy
# proxy = "http://proxy.internal:3128"
"#
    .to_string()
}
