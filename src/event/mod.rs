//! Event surface for the monitor: kinds, callbacks, and the registry.
//!
//! A monitor emits a closed set of events ([`EventKind`]). Callers attach
//! callbacks through an [`EventRegistry`], either with the type-checked
//! `on_*` methods or by event name via [`EventRegistry::bind`] when the
//! event is only known at runtime.

mod error;
mod kind;
mod registry;


pub use error::{CallbackError, RegistryError};
pub use kind::EventKind;
pub use registry::{Callback, ChangeFn, EventRegistry, HookFn};
