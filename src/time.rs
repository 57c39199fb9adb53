//! Clock and sleep abstractions.
//!
//! The poll loop needs two things from time: a timestamp for each
//! snapshot ([`Clock`]) and a pause between cycles ([`Sleeper`]). Both
//! are traits so tests can substitute controlled implementations for
//! the system clock and the tokio timer.

use std::future::Future;
use std::time::{Duration, SystemTime};

/// Source of the timestamps recorded on snapshots.
///
/// Production code uses [`SystemClock`]; tests swap in fixed or stepping
/// clocks to make received-at assertions exact.
///
/// # Example
///
/// ```
/// use apiwatch::time::{Clock, SystemClock};
/// use std::time::SystemTime;
///
/// let now = SystemClock.now();
/// assert!(now.duration_since(SystemTime::UNIX_EPOCH).is_ok());
/// ```
pub trait Clock: Send + Sync {
    /// Reads the clock.
    fn now(&self) -> SystemTime;
}

/// The real clock. Delegates to [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Abstraction over waiting, so the poll cadence can be tested without
/// real delays.
pub trait Sleeper: Send + Sync {
    /// Waits for the given duration.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A sleeper that returns immediately regardless of the requested duration.
///
/// Useful in tests that need to drive many poll cycles without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
