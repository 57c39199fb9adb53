//! apiwatch: HTTP endpoint change monitor
//!
//! Binary entry point. The real work lives in the library crate and in
//! [`run`]; this file only maps command-line dispatch to exit codes.

use std::process::ExitCode;

use clap::Parser;

use apiwatch::config::{Cli, Command, WatchConfig, write_template};

mod app;
mod run;

use app::{init_tracing, print_hint};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Init { ref output }) => init_watch_file(output),
        None => start(cli),
    }
}

/// Writes the starter configuration for the `init` subcommand.
fn init_watch_file(output: &std::path::Path) -> ExitCode {
    match write_template(output) {
        Ok(()) => {
            println!("Wrote configuration template to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("apiwatch: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Merges the configuration and drives the poll loop to completion.
#[cfg(not(tarpaulin_include))]
fn start(cli: Cli) -> ExitCode {
    let config = match WatchConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("apiwatch: {e}");
            print_hint(&e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.verbose);
    tracing::info!("watching {config}");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build tokio runtime");

    match runtime.block_on(run::watch(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
    }
}
