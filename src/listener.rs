//! Side-effect listeners keyed by action kind.
//!
//! Listeners observe dispatched actions after the reduce phase and before
//! user middleware. They receive the action payload and a read-only view of
//! the post-reduce state; all writes still have to go through dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::action::Action;
use crate::state::StateView;

pub(crate) type ListenerFn = Arc<dyn Fn(&Value, &StateView) + Send + Sync>;

/// A side-effect callback bound to one action kind.
pub struct Listener {
    kind: String,
    callback: ListenerFn,
}

impl Listener {
    /// Bind `callback` to actions of `kind`.
    ///
    /// The callback receives the action payload first and the state view
    /// second. Several listeners may share one kind; they fire in
    /// registration order.
    pub fn new<F>(kind: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Value, &StateView) + Send + Sync + 'static,
    {
        Self {
            kind: kind.into(),
            callback: Arc::new(callback),
        }
    }
}

/// Ordered action-kind → callback-list mapping, built once at assembly.
///
/// Registration after assembly is unrepresentable: the router consumes the
/// listener records when it builds this registry, and no handle to it is
/// handed back out.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    by_kind: HashMap<String, Vec<ListenerFn>>,
}

impl ListenerRegistry {
    pub(crate) fn register(&mut self, listener: Listener) {
        self.by_kind
            .entry(listener.kind)
            .or_default()
            .push(listener.callback);
    }

    /// Invoke every listener registered for the action's kind, in
    /// registration order. A panicking callback propagates and halts the
    /// remaining listeners for this action.
    pub(crate) fn notify(&self, action: &Action, view: &StateView) {
        if let Some(callbacks) = self.by_kind.get(&action.kind) {
            for callback in callbacks {
                callback(&action.data, view);
            }
        }
    }
}
