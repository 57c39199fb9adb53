//! Configuration layer for apiwatch.
//!
//! Raw input arrives from two sources: command-line flags ([`Cli`]) and
//! an optional TOML file ([`TomlConfig`]). [`WatchConfig`] merges the
//! two and is the only form the rest of the crate sees. The `init`
//! subcommand writes a starter file via [`write_template`].
//!
//! Merging follows one rule: a value given on the command line beats the
//! file, and the file beats the built-in defaults in [`defaults`]. Two
//! fields need more nuance:
//!
//! - Headers merge across sources. File headers are applied first, then
//!   CLI `--header` values override entries with the same name, and a
//!   bearer token (`--bearer` or `request.bearer`) folds into the
//!   `Authorization` header last.
//! - Query parameters concatenate: file parameters in key order, then
//!   CLI parameters in the order given.
//!
//! `--insecure` only disables TLS verification; it cannot re-enable a
//! verification the file turned off. Redirect behaviour
//! (`client.follow_redirects`) has no flag and is file-only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod watch;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod watch_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, config_template};
pub use watch::{WatchConfig, write_template};
