//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between raw input and a usable config.
///
/// Covers parsing, validation, and the file operations behind `--config`
/// and `init`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `--config` file could not be read.
    #[error("Could not read config file '{}': {source}", path.display())]
    Read {
        /// File we tried to read
        path: PathBuf,
        /// The I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML, or names unknown keys.
    #[error("Could not parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// The `init` template could not be written.
    #[error("Could not write config file '{}': {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// The I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A required field was supplied by neither the CLI nor the file.
    #[error("No {field} was given. {hint}")]
    Missing {
        /// Config key that was absent
        field: &'static str,
        /// Remedy shown to the user
        hint: &'static str,
    },

    /// Invalid target URL.
    #[error("URL '{url}' is unusable: {reason}")]
    BadUrl {
        /// Rejected input
        url: String,
        /// Parser's explanation
        reason: String,
    },

    /// Invalid proxy URL.
    #[error("Proxy URL '{url}' is unusable: {reason}")]
    BadProxy {
        /// Rejected input
        url: String,
        /// Parser's explanation
        reason: String,
    },

    /// Invalid duration value (zero, negative, or not a number).
    #[error("Bad {field} duration: {reason}")]
    BadDuration {
        /// Which setting held the value
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The method token is empty or contains characters HTTP forbids.
    #[error("'{0}' is not an HTTP method")]
    BadMethod(String),

    /// A `--header` value with no recognised separator.
    #[error("Header '{value}' needs a 'Name=Value' or 'Name: Value' separator")]
    BadHeader {
        /// The string as given
        value: String,
    },

    /// The header name is not a legal HTTP token.
    #[error("Bad header name '{name}': {reason}")]
    BadHeaderName {
        /// Rejected name
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// The header value contains bytes HTTP forbids.
    #[error("Bad value for header '{name}': {reason}")]
    BadHeaderValue {
        /// Header the value was meant for
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Invalid query parameter format.
    #[error("Query parameter '{value}' is not in 'key=value' form")]
    BadQuery {
        /// The string as given
        value: String,
    },

    /// The request body is not valid JSON.
    #[error("Body is not valid JSON: {reason}")]
    BadBody {
        /// Parser's explanation
        reason: String,
    },
}
