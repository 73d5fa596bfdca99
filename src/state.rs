//! Immutable state snapshots and the read-only view over them.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StateError;

/// One immutable picture of the whole state: slice name → slice value.
///
/// Rebuilding a snapshot after a dispatch clones slice `Arc`s, so slices the
/// dispatch did not touch stay pointer-identical across snapshots.
pub(crate) type Snapshot = HashMap<String, Arc<Value>>;

/// Read-only façade over one snapshot.
///
/// A view never observes later mutations; the engine constructs a fresh view
/// for every notification and render pass.
#[derive(Clone)]
pub struct StateView {
    snapshot: Arc<Snapshot>,
}

impl StateView {
    pub(crate) fn new(snapshot: Arc<Snapshot>) -> Self {
        Self { snapshot }
    }

    /// Look up a slice by name.
    ///
    /// An unknown name is an error rather than a silent null, so typos in
    /// slice names surface at the call site.
    pub fn slice(&self, name: &str) -> Result<&Value, StateError> {
        self.snapshot
            .get(name)
            .map(|value| value.as_ref())
            .ok_or_else(|| StateError::UnknownSlice {
                name: name.to_string(),
            })
    }

    /// Look up a slice and deserialize it into `T`.
    pub fn slice_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, StateError> {
        let value = self.slice(name)?;
        serde_json::from_value(value.clone()).map_err(|source| StateError::SliceShape {
            name: name.to_string(),
            source,
        })
    }
}
