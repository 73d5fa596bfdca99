//! Error types for registration, assembly, and dispatch.
//!
//! Two failure families exist: configuration mistakes caught while wiring
//! slices and listeners together, and lifecycle violations caught when an
//! operation arrives in the wrong phase. Both are fatal and synchronous;
//! nothing is retried or suppressed internally.

use thiserror::Error;

/// Errors raised while registering slices, mutators, or assembling the app.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Slice names key the global state map and must be non-empty.
    #[error("slice name must be a non-empty string")]
    InvalidSliceName,

    /// Each action kind may have at most one mutator per slice.
    #[error("slice '{slice}' already has a mutator for action '{kind}'")]
    DuplicateMutator { slice: String, kind: String },

    /// Two slices registered under the same name.
    #[error("cannot register slice '{name}' because that name is already taken")]
    DuplicateSlice { name: String },
}

/// Errors raised when an operation arrives in the wrong lifecycle phase.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Dispatch requires an assembled application.
    #[error("dispatch called before the application was assembled")]
    NotAssembled,

    /// Mutator tables freeze once the owning application is assembled.
    #[error("slice '{slice}' is frozen; its mutator table cannot change after assembly")]
    Frozen { slice: String },
}

/// Errors raised by slice lookups on a state view.
#[derive(Debug, Error)]
pub enum StateError {
    /// The requested slice was never registered.
    #[error("no slice named '{name}' exists")]
    UnknownSlice { name: String },

    /// The slice exists but does not deserialize to the requested type.
    #[error("slice '{name}' does not match the requested type")]
    SliceShape {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Umbrella error for call sites that can fail in more than one family.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    State(#[from] StateError),
}
