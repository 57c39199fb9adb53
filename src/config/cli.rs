//! Command-line surface, parsed with clap's derive API.
//!
//! Every value is optional here; requiredness is enforced later, when
//! the CLI is merged with the config file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// apiwatch: HTTP endpoint change monitor
///
/// Polls a single HTTP endpoint at a fixed interval and reports
/// whenever the response changes.
#[derive(Debug, Parser)]
#[command(name = "apiwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional subcommand; plain invocation starts polling
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Target URL to poll (required for run mode)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// HTTP method for poll requests
    #[arg(long)]
    pub method: Option<String>,

    /// Extra request header as 'Name=Value' or 'Name: Value'; repeat for more
    #[arg(long = "header", value_name = "K=V")]
    pub headers: Vec<String>,

    /// Query parameter as 'key=value'; repeat for more
    #[arg(long = "query", value_name = "K=V")]
    pub query: Vec<String>,

    /// Shorthand for an 'Authorization: Bearer <token>' header
    #[arg(long)]
    pub bearer: Option<String>,

    /// JSON body to send with every poll request
    #[arg(long)]
    pub body: Option<String>,

    /// Poll interval in seconds (fractional values allowed)
    #[arg(long)]
    pub interval: Option<f64>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Proxy URL for poll requests
    #[arg(long)]
    pub proxy: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Read additional configuration from this TOML file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log debug detail
    #[arg(long, short)]
    pub verbose: bool,
}

/// Secondary modes reached through a subcommand.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a commented configuration template
    Init {
        /// Where to write the template
        #[arg(long, short, default_value = "apiwatch.toml")]
        output: PathBuf,
    },
}
