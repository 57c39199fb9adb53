//! Merged and validated configuration.
//!
//! CLI arguments and the optional TOML file are merged here into one
//! struct whose fields are already parsed into their final types. Nothing
//! downstream re-validates.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use url::Url;

use crate::transport::RequestSpec;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// The complete poll configuration, after merging and validation.
///
/// Every field is in its final parsed form; a constructed value is always
/// usable as-is. Build one with [`WatchConfig::from_sources`] (or
/// [`WatchConfig::load`] to read the TOML file first).
#[derive(Debug)]
pub struct WatchConfig {
    /// Target URL to poll (required)
    pub url: Url,

    /// HTTP method for poll requests
    pub method: Method,

    /// HTTP headers for poll requests
    pub headers: HeaderMap,

    /// Query parameters appended to the URL, in order
    pub query: Vec<(String, String)>,

    /// JSON body sent with every poll request (optional)
    pub body: Option<serde_json::Value>,

    /// Per-request timeout (optional)
    pub timeout: Option<Duration>,

    /// Poll interval
    pub interval: Duration,

    /// Whether to follow HTTP redirects
    pub follow_redirects: bool,

    /// Whether to verify TLS certificates
    pub verify_tls: bool,

    /// Proxy URL for poll requests (optional)
    pub proxy: Option<Url>,

    /// Debug logging requested on the command line
    pub verbose: bool,
}

impl fmt::Display for WatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout = self
            .timeout
            .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));
        let proxy = self
            .proxy
            .as_ref()
            .map_or_else(|| "none".to_string(), Url::to_string);

        write!(
            f,
            "{} {} | interval: {}s, timeout: {timeout}, redirects: {}, \
             verify_tls: {}, proxy: {proxy}",
            self.method,
            self.url,
            self.interval.as_secs_f64(),
            self.follow_redirects,
            self.verify_tls,
        )
    }
}

impl WatchConfig {
    /// Merges CLI arguments with an already-parsed TOML document.
    ///
    /// A value present on the CLI always beats the file.
    ///
    /// # Errors
    ///
    /// The first field that refuses to parse aborts the merge, and the
    /// [`ConfigError`] variant names the offending input. A `url`
    /// supplied by neither source is [`ConfigError::Missing`].
    pub fn from_sources(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        // client behaviour: redirects are file-only, --insecure only disables
        let follow_redirects = toml
            .and_then(|t| t.client.follow_redirects)
            .unwrap_or(defaults::FOLLOW_REDIRECTS);
        let verify_tls = toml.and_then(|t| t.client.verify_tls).unwrap_or(defaults::VERIFY_TLS)
            && !cli.insecure;

        Ok(Self {
            url: Self::merge_url(cli, toml)?,
            method: Self::merge_method(cli, toml)?,
            headers: Self::merge_headers(cli, toml)?,
            query: Self::merge_query(cli, toml)?,
            body: Self::merge_body(cli, toml)?,
            timeout: Self::merge_timeout(cli, toml)?,
            interval: Self::merge_interval(cli, toml)?,
            follow_redirects,
            verify_tls,
            proxy: Self::merge_proxy(cli, toml)?,
            verbose: cli.verbose,
        })
    }

    /// Reads the `--config` file (when given) and merges it with the CLI.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when the merged
    /// result fails validation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = cli.config.as_deref().map(TomlConfig::load).transpose()?;

        Self::from_sources(cli, toml.as_ref())
    }

    /// Builds the request description sent on every poll cycle.
    #[must_use]
    pub fn request_spec(&self) -> RequestSpec {
        let mut spec = RequestSpec::new(self.method.clone(), self.url.clone())
            .with_headers(self.headers.clone());

        for (key, value) in &self.query {
            spec = spec.with_query(key.clone(), value.clone());
        }
        if let Some(body) = &self.body {
            spec = spec.with_body(body.clone());
        }
        if let Some(timeout) = self.timeout {
            spec = spec.with_timeout(timeout);
        }

        spec
    }

    fn merge_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let Some(raw) = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.url.as_deref()))
        else {
            return Err(ConfigError::Missing {
                field: "url",
                hint: "Pass --url or set request.url in the config file.",
            });
        };

        Url::parse(raw).map_err(|e| ConfigError::BadUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }

    fn merge_method(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Method, ConfigError> {
        let token = cli
            .method
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.method.as_deref()))
            .unwrap_or(defaults::METHOD);

        // `get` and `GET` both work
        token
            .to_ascii_uppercase()
            .parse::<Method>()
            .map_err(|_| ConfigError::BadMethod(token.to_string()))
    }

    fn merge_headers(cli: &Cli, toml: Option<&TomlConfig>) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        // file headers land first so CLI entries can replace them by name
        if let Some(toml) = toml {
            for (name, value) in &toml.request.headers {
                headers.insert(header_name(name)?, header_value(name, value)?);
            }
        }
        for raw in &cli.headers {
            let (name, value) = split_header(raw)?;
            headers.insert(header_name(&name)?, header_value(&name, &value)?);
        }

        // the bearer shorthand owns the Authorization slot
        let bearer = cli
            .bearer
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.bearer.as_deref()));
        if let Some(token) = bearer {
            let auth = format!("Bearer {token}");
            headers.insert(AUTHORIZATION, header_value("Authorization", &auth)?);
        }

        Ok(headers)
    }

    fn merge_query(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<(String, String)>, ConfigError> {
        let mut query = Vec::new();

        // file parameters keep their key order; CLI entries follow as given
        if let Some(toml) = toml {
            for (key, value) in &toml.request.query {
                query.push((key.clone(), value.clone()));
            }
        }
        for entry in &cli.query {
            let (key, value) = entry.split_once('=').ok_or_else(|| ConfigError::BadQuery {
                value: entry.clone(),
            })?;
            query.push((key.trim().to_string(), value.trim().to_string()));
        }

        Ok(query)
    }

    fn merge_body(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<serde_json::Value>, ConfigError> {
        cli.body
            .as_deref()
            .or_else(|| toml.and_then(|t| t.request.body.as_deref()))
            .map(|text| {
                serde_json::from_str(text).map_err(|e| ConfigError::BadBody {
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    fn merge_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Duration>, ConfigError> {
        match cli.timeout.or_else(|| toml.and_then(|t| t.request.timeout)) {
            None => Ok(None),
            Some(0) => Err(ConfigError::BadDuration {
                field: "timeout",
                reason: "cannot be zero".to_string(),
            }),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
        }
    }

    fn merge_interval(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .interval
            .or_else(|| toml.and_then(|t| t.monitor.interval))
            .unwrap_or(defaults::INTERVAL_SECS);

        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(ConfigError::BadDuration {
                field: "interval",
                reason: format!("must be a positive number of seconds, got {seconds}"),
            });
        }

        Duration::try_from_secs_f64(seconds).map_err(|e| ConfigError::BadDuration {
            field: "interval",
            reason: e.to_string(),
        })
    }

    fn merge_proxy(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Url>, ConfigError> {
        cli.proxy
            .as_deref()
            .or_else(|| toml.and_then(|t| t.client.proxy.as_deref()))
            .map(|s| {
                Url::parse(s).map_err(|e| ConfigError::BadProxy {
                    url: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Writes the commented starter template for the `init` subcommand.
///
/// # Errors
///
/// [`ConfigError::Write`] when the file cannot be created or written.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

// Header parsing

fn split_header(s: &str) -> Result<(String, String), ConfigError> {
    // '=' is tried first; a string holding both separators splits at the
    // first '='
    s.split_once('=')
        .or_else(|| s.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| ConfigError::BadHeader {
            value: s.to_string(),
        })
}

fn header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::BadHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::BadHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
