//! Named state slices and their mutator tables.
//!
//! A [`Slice`] wraps one named region of global state and owns the mapping
//! from action kind to mutator. During dispatch the engine asks each slice to
//! reduce itself; a slice with no mutator for the action hands back its
//! current value untouched, so consumers can detect "nothing changed" with a
//! pointer comparison.
//!
//! Lifecycle: `Unassembled → (handle)* → Assembled(frozen)`. Assembly is a
//! one-way transition; afterwards the mutator table rejects all changes.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::action::Action;
use crate::error::{ConfigurationError, Error, LifecycleError};

/// Mutator applied to a slice draft when its action kind fires.
///
/// The first argument is a draft of the current slice value; mutating it (or
/// replacing it wholesale with `*draft = ...`) produces the next value. The
/// second argument is the action payload.
pub(crate) type MutatorFn = Arc<dyn Fn(&mut Value, &Value) + Send + Sync>;

/// Handle to one named region of global state.
///
/// Handles are clone-cheap and shared: the handle the caller keeps after
/// registration is the same one the router freezes at assembly time.
#[derive(Clone)]
pub struct Slice {
    inner: Arc<RwLock<SliceInner>>,
}

struct SliceInner {
    name: String,
    initial: Value,
    mutators: HashMap<String, MutatorFn>,
    assembled: bool,
}

impl Slice {
    /// Create a slice seeded with `initial`.
    ///
    /// Fails if `name` is empty. Name collisions are detected later, at
    /// assembly, where all participating slices are known.
    pub fn new(name: impl Into<String>, initial: impl Into<Value>) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::InvalidSliceName);
        }
        Ok(Self {
            inner: Arc::new(RwLock::new(SliceInner {
                name,
                initial: initial.into(),
                mutators: HashMap::new(),
                assembled: false,
            })),
        })
    }

    /// The slice's name, as registered into the global state map.
    pub fn name(&self) -> String {
        self.inner.read().name.clone()
    }

    /// Register a mutator for `kind`. Chainable.
    ///
    /// At most one mutator may exist per action kind; a duplicate registration
    /// fails and leaves the first one intact. Fails once the owning
    /// application has been assembled.
    pub fn handle<F>(&self, kind: impl Into<String>, mutator: F) -> Result<&Self, Error>
    where
        F: Fn(&mut Value, &Value) + Send + Sync + 'static,
    {
        let kind = kind.into();
        let mut inner = self.inner.write();
        if inner.assembled {
            return Err(LifecycleError::Frozen {
                slice: inner.name.clone(),
            }
            .into());
        }
        if inner.mutators.contains_key(&kind) {
            return Err(ConfigurationError::DuplicateMutator {
                slice: inner.name.clone(),
                kind,
            }
            .into());
        }
        tracing::trace!("Slice '{}' handles '{}'", inner.name, kind);
        inner.mutators.insert(kind, Arc::new(mutator));
        Ok(self)
    }

    /// Remove the mutator for `kind`, if any.
    ///
    /// Subject to the same freeze rule as [`Slice::handle`]: the table is
    /// immutable after assembly.
    pub fn remove_handler(&self, kind: &str) -> Result<(), LifecycleError> {
        let mut inner = self.inner.write();
        if inner.assembled {
            return Err(LifecycleError::Frozen {
                slice: inner.name.clone(),
            });
        }
        inner.mutators.remove(kind);
        Ok(())
    }

    /// Whether a mutator is registered for `kind`.
    pub fn handles(&self, kind: &str) -> bool {
        self.inner.read().mutators.contains_key(kind)
    }

    /// Freeze the mutator table. One-way; called by the router at assembly.
    pub(crate) fn mark_assembled(&self) {
        self.inner.write().assembled = true;
    }

    /// Reduce this slice for one action. Engine-invoked.
    ///
    /// `None` for `current` seeds the slice from its initial value. When a
    /// mutator matches, it runs against a draft copy and the result is
    /// returned in a fresh `Arc`; otherwise the existing `Arc` is handed back
    /// unchanged, keeping the value pointer-stable across dispatches.
    pub(crate) fn reduce(&self, current: Option<&Arc<Value>>, action: &Action) -> Arc<Value> {
        // Clone the mutator out so no lock is held while user code runs.
        let mutator = self.inner.read().mutators.get(&action.kind).cloned();
        match mutator {
            Some(mutator) => {
                let mut draft = match current {
                    Some(value) => (**value).clone(),
                    None => self.inner.read().initial.clone(),
                };
                mutator(&mut draft, &action.data);
                Arc::new(draft)
            }
            None => match current {
                Some(value) => Arc::clone(value),
                None => Arc::new(self.inner.read().initial.clone()),
            },
        }
    }
}
