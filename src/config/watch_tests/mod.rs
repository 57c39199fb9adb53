//! Tests for the merged configuration.
//!
//! The `cli_args` and `toml_doc` helpers below build the two raw inputs;
//! each child module covers one slice of `WatchConfig::from_sources`.

use clap::Parser;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::watch::WatchConfig;

/// Parses CLI fixtures with the binary name prepended.
fn cli_args(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("apiwatch").chain(args.iter().copied()))
}

/// Parses an inline TOML document, panicking on bad fixture syntax.
fn toml_doc(content: &str) -> TomlConfig {
    TomlConfig::parse(content).expect("inline TOML fixture")
}

mod options_tests;
