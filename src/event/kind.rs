//! The closed set of events a monitor emits.

use std::fmt;
use std::str::FromStr;

use super::RegistryError;

/// The three events emitted during a poll cycle.
///
/// Event names accept a few spellings at registration time; see the
/// [`FromStr`] implementation for the resolution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Fired at the start of every poll cycle, before any request is sent.
    Request,
    /// Fired when the observed response differs from the previous one.
    ///
    /// Also fired once after the first successful poll, with the same
    /// snapshot passed as both previous and current.
    Change,
    /// Fired when the observed response matches the previous one.
    NoChange,
}

impl EventKind {
    /// All event kinds, in dispatch order within a cycle.
    pub const ALL: [Self; 3] = [Self::Request, Self::Change, Self::NoChange];

    /// Canonical name, as used in registration and log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Change => "change",
            Self::NoChange => "no_change",
        }
    }

    /// Number of snapshot parameters the callback for this event receives.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Change => 2,
            Self::Request | Self::NoChange => 0,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = RegistryError;

    /// Resolves an event name to its kind.
    ///
    /// Matching is case-insensitive and tolerates a single leading `on_`
    /// prefix, so `"change"`, `"Change"`, and `"on_change"` all resolve
    /// to [`EventKind::Change`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowered = name.to_ascii_lowercase();
        let stripped = lowered.strip_prefix("on_").unwrap_or(&lowered);
        match stripped {
            "request" => Ok(Self::Request),
            "change" => Ok(Self::Change),
            "no_change" => Ok(Self::NoChange),
            _ => Err(RegistryError::UnknownEvent {
                name: name.to_string(),
            }),
        }
    }
}
