//! Process-level plumbing for the binary: logging setup and the
//! follow-up hints printed after configuration errors.

use apiwatch::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Prints a hint for configuration errors that have an obvious next step.
pub fn print_hint(error: &ConfigError) {
    // A missing URL and an unreadable file both mean the user has no
    // working config yet.
    let no_config_yet = matches!(
        error,
        ConfigError::Missing { field: "url", .. } | ConfigError::Read { .. }
    );

    if no_config_yet {
        eprintln!("\nRun 'apiwatch init' to generate a configuration template.");
    } else if matches!(error, ConfigError::BadBody { .. }) {
        eprintln!("\nThe request body must be one JSON document, e.g. --body '{{\"page\": 1}}'.");
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the verbosity chosen here.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
