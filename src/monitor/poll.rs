//! The recurring poll loop.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::event::{Callback, CallbackError, EventKind, EventRegistry, RegistryError};
use crate::time::{Clock, Sleeper, SystemClock, TokioSleeper};
use crate::transport::{RequestSpec, Transport};

use super::{MonitorError, Snapshot};

/// Polls one HTTP endpoint at a fixed interval and dispatches events.
///
/// Each cycle fires `request`, performs the poll, compares the observed
/// response against the previous [`Snapshot`], fires `change` or
/// `no_change`, then sleeps for the full interval. Cycle time is not
/// compensated, so the effective period is the interval plus request
/// and callback time.
///
/// Callbacks must be registered before the loop starts; registration
/// borrows the monitor mutably, so it cannot race a running loop.
///
/// # Type Parameters
///
/// * `T` - The [`Transport`] performing the poll request
/// * `S` - The [`Sleeper`] pacing the loop (defaults to [`TokioSleeper`])
/// * `C` - The [`Clock`] timestamping snapshots (defaults to [`SystemClock`])
///
/// # Example
///
/// ```no_run
/// use apiwatch::monitor::Monitor;
/// use apiwatch::transport::{ReqwestTransport, RequestSpec};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = url::Url::parse("https://api.example.com/status")?;
/// let spec = RequestSpec::get(url);
/// let mut monitor = Monitor::new(ReqwestTransport::new(), spec, Duration::from_secs(60))?;
///
/// monitor.on_change(|previous, current| {
///     println!("{} -> {}", previous.status, current.status);
///     Ok(())
/// });
///
/// monitor.run().await?;
/// # Ok(())
/// # }
/// ```
pub struct Monitor<T, S = TokioSleeper, C = SystemClock> {
    transport: T,
    spec: RequestSpec,
    interval: Duration,
    sleeper: S,
    clock: C,
    registry: EventRegistry,
    last: Option<Snapshot>,
}

impl<T> Monitor<T, TokioSleeper, SystemClock>
where
    T: Transport,
{
    /// Creates a monitor that polls with the given transport and request.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::InvalidInterval`] if the interval is zero.
    pub fn new(transport: T, spec: RequestSpec, interval: Duration) -> Result<Self, MonitorError> {
        if interval.is_zero() {
            return Err(MonitorError::InvalidInterval);
        }
        Ok(Self {
            transport,
            spec,
            interval,
            sleeper: TokioSleeper,
            clock: SystemClock,
            registry: EventRegistry::new(),
            last: None,
        })
    }
}

impl<T, S, C> Monitor<T, S, C>
where
    T: Transport,
    S: Sleeper,
    C: Clock,
{
    /// Replaces the sleeper pacing the loop.
    ///
    /// This allows injecting an instant or recording sleeper in tests.
    #[must_use]
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> Monitor<T, S2, C> {
        Monitor {
            transport: self.transport,
            spec: self.spec,
            interval: self.interval,
            sleeper,
            clock: self.clock,
            registry: self.registry,
            last: self.last,
        }
    }

    /// Replaces the clock timestamping snapshots.
    ///
    /// This allows injecting a mock clock in tests.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Monitor<T, S, C2> {
        Monitor {
            transport: self.transport,
            spec: self.spec,
            interval: self.interval,
            sleeper: self.sleeper,
            clock,
            registry: self.registry,
            last: self.last,
        }
    }

    /// Binds a callback to an event named at runtime.
    ///
    /// Returns the resolved [`EventKind`] on success. See
    /// [`EventRegistry::bind`] for the resolution and arity rules.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the name does not resolve or the
    /// callback shape does not match the event.
    pub fn on(&mut self, event: &str, callback: Callback) -> Result<EventKind, RegistryError> {
        self.registry.bind(event, callback)
    }

    /// Binds the `request` callback, replacing any earlier one.
    pub fn on_request<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut() -> Result<(), CallbackError> + Send + 'static,
    {
        self.registry.on_request(callback);
        self
    }

    /// Binds the `change` callback, replacing any earlier one.
    ///
    /// The callback receives the previous and current snapshots. After
    /// the first successful poll both parameters refer to the same
    /// snapshot.
    pub fn on_change<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&Snapshot, &Snapshot) -> Result<(), CallbackError> + Send + 'static,
    {
        self.registry.on_change(callback);
        self
    }

    /// Binds the `no_change` callback, replacing any earlier one.
    pub fn on_no_change<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut() -> Result<(), CallbackError> + Send + 'static,
    {
        self.registry.on_no_change(callback);
        self
    }

    /// Returns the configured polling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the request description sent on every cycle.
    #[must_use]
    pub const fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    /// Returns the most recently observed snapshot, if any poll has
    /// succeeded.
    #[must_use]
    pub const fn last_snapshot(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    /// Polls until the shutdown future completes.
    ///
    /// The shutdown future is checked before every cycle and again before
    /// every sleep; when it completes the monitor returns `Ok(())` without
    /// firing further callbacks. If it completes while a poll request is
    /// in flight, that cycle is abandoned: no snapshot is stored and no
    /// callback fires for it.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Transport`] when the poll request fails and
    /// [`MonitorError::Callback`] when a callback returns an error. Both
    /// stop the loop immediately.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<(), MonitorError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => return Ok(()),

                result = self.tick() => result?,
            }

            tokio::select! {
                biased;

                () = &mut shutdown => return Ok(()),

                () = self.sleeper.sleep(self.interval) => {}
            }
        }
    }

    /// Polls forever.
    ///
    /// Equivalent to [`run_until`](Self::run_until) with a shutdown future
    /// that never completes.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`run_until`](Self::run_until).
    pub async fn run(&mut self) -> Result<(), MonitorError> {
        self.run_until(std::future::pending()).await
    }

    /// Runs one poll cycle: request hook, poll, compare, dispatch, store.
    async fn tick(&mut self) -> Result<(), MonitorError> {
        self.registry
            .dispatch_request()
            .map_err(callback_error(EventKind::Request))?;

        // Without a change callback there is nothing to compare for,
        // so the request itself is skipped this cycle.
        if !self.registry.is_bound(EventKind::Change) {
            return Ok(());
        }

        let raw = self.transport.fetch(&self.spec).await?;
        let current = Snapshot::new(raw, self.clock.now());

        match &self.last {
            // First observation: reported as a change from itself.
            None => {
                self.registry
                    .dispatch_change(&current, &current)
                    .map_err(callback_error(EventKind::Change))?;
            }
            Some(previous) => {
                if current.differs_from(previous) {
                    self.registry
                        .dispatch_change(previous, &current)
                        .map_err(callback_error(EventKind::Change))?;
                } else {
                    self.registry
                        .dispatch_no_change()
                        .map_err(callback_error(EventKind::NoChange))?;
                }
            }
        }

        // Replace the snapshot even when nothing differed, so metadata
        // such as the received timestamp stays current.
        self.last = Some(current);
        Ok(())
    }
}

impl<T, S, C> fmt::Display for Monitor<T, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monitor {{ url: {}, interval: {}s }}",
            self.spec.url,
            self.interval.as_secs_f64()
        )
    }
}

fn callback_error(event: EventKind) -> impl FnOnce(CallbackError) -> MonitorError {
    move |source| MonitorError::Callback { event, source }
}
