//! Callback storage and dispatch for the monitor's event surface.

use std::fmt;

use crate::monitor::Snapshot;

use super::{CallbackError, EventKind, RegistryError};

/// Boxed zero-parameter callback, used for `request` and `no_change`.
pub type HookFn = Box<dyn FnMut() -> Result<(), CallbackError> + Send>;

/// Boxed two-parameter callback receiving (previous, current) snapshots,
/// used for `change`.
pub type ChangeFn = Box<dyn FnMut(&Snapshot, &Snapshot) -> Result<(), CallbackError> + Send>;

/// A callback in one of the two shapes the registry accepts.
///
/// Used with [`EventRegistry::bind`] when the event is named at runtime.
/// The typed `on_*` methods skip this wrapper entirely, so a shape
/// mismatch there is a compile error instead.
pub enum Callback {
    /// Zero-parameter callback, valid for `request` and `no_change`.
    Hook(HookFn),
    /// Two-parameter callback, valid only for `change`.
    Change(ChangeFn),
}

impl Callback {
    /// Wraps a zero-parameter closure.
    pub fn hook<F>(callback: F) -> Self
    where
        F: FnMut() -> Result<(), CallbackError> + Send + 'static,
    {
        Self::Hook(Box::new(callback))
    }

    /// Wraps a two-parameter closure.
    pub fn change<F>(callback: F) -> Self
    where
        F: FnMut(&Snapshot, &Snapshot) -> Result<(), CallbackError> + Send + 'static,
    {
        Self::Change(Box::new(callback))
    }

    /// Number of snapshot parameters this callback takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Hook(_) => 0,
            Self::Change(_) => 2,
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hook(_) => f.write_str("Callback::Hook"),
            Self::Change(_) => f.write_str("Callback::Change"),
        }
    }
}

/// Holds at most one callback per event kind.
///
/// Binding an event that already has a callback replaces the earlier one.
/// Callbacks run one at a time on the poll loop's task; the registry never
/// dispatches concurrently.
#[derive(Default)]
pub struct EventRegistry {
    request: Option<HookFn>,
    change: Option<ChangeFn>,
    no_change: Option<HookFn>,
}

impl EventRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a callback to an event named at runtime.
    ///
    /// The name is resolved per [`EventKind`]'s `FromStr` rules. On success
    /// the resolved kind is returned so callers can report what was bound.
    /// On failure the registry is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownEvent`] if the name does not resolve,
    /// and [`RegistryError::ArityMismatch`] if the callback shape does not
    /// match the event (only `change` takes snapshot parameters).
    pub fn bind(&mut self, event: &str, callback: Callback) -> Result<EventKind, RegistryError> {
        let kind = event.parse::<EventKind>()?;
        match (kind, callback) {
            (EventKind::Request, Callback::Hook(hook)) => self.request = Some(hook),
            (EventKind::NoChange, Callback::Hook(hook)) => self.no_change = Some(hook),
            (EventKind::Change, Callback::Change(callback)) => self.change = Some(callback),
            (kind, callback) => {
                return Err(RegistryError::ArityMismatch {
                    kind,
                    expected: kind.arity(),
                    got: callback.arity(),
                });
            }
        }
        Ok(kind)
    }

    /// Binds the `request` callback, replacing any earlier one.
    pub fn on_request<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut() -> Result<(), CallbackError> + Send + 'static,
    {
        self.request = Some(Box::new(callback));
        self
    }

    /// Binds the `change` callback, replacing any earlier one.
    ///
    /// The callback receives the previous and current snapshots. After the
    /// first successful poll both parameters refer to the same snapshot.
    pub fn on_change<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&Snapshot, &Snapshot) -> Result<(), CallbackError> + Send + 'static,
    {
        self.change = Some(Box::new(callback));
        self
    }

    /// Binds the `no_change` callback, replacing any earlier one.
    pub fn on_no_change<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut() -> Result<(), CallbackError> + Send + 'static,
    {
        self.no_change = Some(Box::new(callback));
        self
    }

    /// Returns true if a callback is bound for the given event.
    #[must_use]
    pub fn is_bound(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Request => self.request.is_some(),
            EventKind::Change => self.change.is_some(),
            EventKind::NoChange => self.no_change.is_some(),
        }
    }

    /// Runs the `request` callback if one is bound.
    pub(crate) fn dispatch_request(&mut self) -> Result<(), CallbackError> {
        match &mut self.request {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }

    /// Runs the `change` callback if one is bound.
    pub(crate) fn dispatch_change(
        &mut self,
        previous: &Snapshot,
        current: &Snapshot,
    ) -> Result<(), CallbackError> {
        match &mut self.change {
            Some(callback) => callback(previous, current),
            None => Ok(()),
        }
    }

    /// Runs the `no_change` callback if one is bound.
    pub(crate) fn dispatch_no_change(&mut self) -> Result<(), CallbackError> {
        match &mut self.no_change {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("request", &self.request.is_some())
            .field("change", &self.change.is_some())
            .field("no_change", &self.no_change.is_some())
            .finish()
    }
}
