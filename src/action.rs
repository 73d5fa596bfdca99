//! The action type dispatched through the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, serializable event.
///
/// `kind` identifies the semantic event and routes the action to the mutators
/// and listeners registered under it. `data` carries an arbitrary payload;
/// signal-only actions carry `Value::Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl Action {
    /// Create an action with a payload.
    pub fn new(kind: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            data: data.into(),
        }
    }

    /// Create a payload-less action.
    pub fn signal(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: Value::Null,
        }
    }
}
