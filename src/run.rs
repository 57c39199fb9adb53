//! Glue between a merged configuration and a running monitor.
//!
//! This is the only place that knows how to turn the `[client]` settings
//! into a reqwest client and when to stop polling. The loop itself lives
//! in the library's monitor module.

use thiserror::Error;
use tokio::signal;

use apiwatch::config::WatchConfig;
use apiwatch::monitor::{Monitor, MonitorError, Snapshot};
use apiwatch::time::{Clock, Sleeper};
use apiwatch::transport::{ReqwestTransport, Transport};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Ways a watch can fail to start or stay up.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The `[client]` settings produced an unbuildable reqwest client.
    #[error("Could not build the HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The poll loop gave up.
    #[error("Watch stopped: {0}")]
    Monitor(#[from] MonitorError),
}

/// Polls the configured endpoint until ctrl-c or SIGTERM arrives.
///
/// # Errors
///
/// [`WatchError::ClientBuild`] when reqwest rejects the proxy or TLS
/// settings, [`WatchError::Monitor`] when a poll or a callback fails.
#[cfg(not(tarpaulin_include))]
pub async fn watch(config: WatchConfig) -> Result<(), WatchError> {
    let transport = build_transport(&config)?;
    let spec = config.request_spec();

    let mut monitor = Monitor::new(transport, spec, config.interval)?;
    register_listeners(&mut monitor);

    monitor.run_until(shutdown()).await?;

    tracing::info!("shutting down");
    Ok(())
}

/// Builds the HTTP transport the `[client]` settings describe.
fn build_transport(config: &WatchConfig) -> Result<ReqwestTransport, WatchError> {
    let mut builder = reqwest::Client::builder();

    if !config.follow_redirects {
        builder = builder.redirect(reqwest::redirect::Policy::none());
    }
    if !config.verify_tls {
        builder = builder.danger_accept_invalid_certs(true);
    }
    if let Some(ref proxy) = config.proxy {
        let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(WatchError::ClientBuild)?;
        builder = builder.proxy(proxy);
    }

    let client = builder.build().map_err(WatchError::ClientBuild)?;
    Ok(ReqwestTransport::from(client))
}

/// Hangs the logging callbacks on the monitor.
fn register_listeners<T, S, C>(monitor: &mut Monitor<T, S, C>)
where
    T: Transport,
    S: Sleeper,
    C: Clock,
{
    let url = monitor.spec().url.clone();

    monitor.on_request(move || {
        tracing::debug!("polling {url}");
        Ok(())
    });

    // On the first successful poll the monitor hands the same snapshot
    // in both positions.
    monitor.on_change(|previous, current| {
        if std::ptr::eq(previous, current) {
            tracing::info!("initial response: {}", summarize(current));
        } else {
            tracing::info!(
                "response changed: {} -> {}",
                summarize(previous),
                summarize(current)
            );
        }
        Ok(())
    });

    monitor.on_no_change(|| {
        tracing::debug!("no change");
        Ok(())
    });
}

/// Formats a snapshot as a short human-readable summary.
fn summarize(snapshot: &Snapshot) -> String {
    let body_kind = if snapshot.payload.is_some() {
        "json"
    } else {
        "raw"
    };
    format!(
        "{} ({} bytes, {})",
        snapshot.status,
        snapshot.body.len(),
        body_kind
    )
}

/// Resolves when the process receives ctrl-c or, on unix, SIGTERM.
#[cfg(not(tarpaulin_include))]
async fn shutdown() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
