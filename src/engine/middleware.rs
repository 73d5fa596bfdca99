//! Post-reduce middleware chain.
//!
//! Middleware observe every dispatched action after the reduce phase. The
//! chain is ordered: the listener-notification step always runs first, then
//! user middleware in the order supplied at assembly. A middleware that does
//! not call `next` stops the rest of the chain; subscriber notification is
//! not part of the chain and still runs.

use crate::action::Action;
use crate::listener::ListenerRegistry;
use crate::state::StateView;

/// One step in the post-reduce chain.
pub trait Middleware: Send + Sync {
    /// Observe `action` against the post-reduce `view`, then call `next` to
    /// continue the chain (possibly with a different action).
    fn handle(&self, action: &Action, view: &StateView, next: &mut dyn FnMut(&Action, &StateView));
}

/// Run `chain` front to back for one action.
pub(crate) fn run_chain(chain: &[Box<dyn Middleware>], action: &Action, view: &StateView) {
    if let Some((head, rest)) = chain.split_first() {
        head.handle(action, view, &mut |action, view| run_chain(rest, action, view));
    }
}

/// The always-first chain step: fires matching listeners, then continues.
pub(crate) struct NotificationMiddleware {
    registry: ListenerRegistry,
}

impl NotificationMiddleware {
    pub(crate) fn new(registry: ListenerRegistry) -> Self {
        Self { registry }
    }
}

impl Middleware for NotificationMiddleware {
    fn handle(&self, action: &Action, view: &StateView, next: &mut dyn FnMut(&Action, &StateView)) {
        self.registry.notify(action, view);
        next(action, view);
    }
}

/// Middleware that logs every action kind at debug level.
pub struct ActionLog;

impl Middleware for ActionLog {
    fn handle(&self, action: &Action, view: &StateView, next: &mut dyn FnMut(&Action, &StateView)) {
        tracing::debug!("Action '{}'", action.kind);
        next(action, view);
    }
}
