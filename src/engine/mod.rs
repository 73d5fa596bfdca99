//! Minimal synchronous store engine.
//!
//! Holds the current snapshot and runs the dispatch pipeline:
//!
//! ```text
//! dispatch ──→ reduce all slices ──→ middleware chain ──→ subscribers
//!                                    (listeners first)
//! ```
//!
//! Every phase is synchronous on the dispatching thread. A dispatch issued
//! from inside a listener, middleware, or subscriber is queued and processed
//! after the current pass completes; passes never interleave.

pub(crate) mod middleware;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

use crate::action::Action;
use crate::slice::Slice;
use crate::state::{Snapshot, StateView};
use self::middleware::Middleware;

/// Internal action kind used to seed every slice from its initial value.
const SEED_KIND: &str = "@@railyard/seed";

pub(crate) type Subscriber = Arc<dyn Fn(&StateView) + Send + Sync>;

pub(crate) struct StoreEngine {
    slices: Vec<Slice>,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: RwLock<Vec<Subscriber>>,
    // Re-entrant so a dispatch issued from user code on the same thread can
    // reach the queue instead of deadlocking. The RefCell borrow is never
    // held across user code.
    core: ReentrantMutex<RefCell<EngineCore>>,
}

struct EngineCore {
    snapshot: Arc<Snapshot>,
    queue: VecDeque<Action>,
    dispatching: bool,
}

impl StoreEngine {
    pub(crate) fn new(slices: Vec<Slice>, middleware: Vec<Box<dyn Middleware>>) -> Self {
        let seed = Action::signal(SEED_KIND);
        let mut snapshot = Snapshot::with_capacity(slices.len());
        for slice in &slices {
            snapshot.insert(slice.name(), slice.reduce(None, &seed));
        }
        Self {
            slices,
            middleware,
            subscribers: RwLock::new(Vec::new()),
            core: ReentrantMutex::new(RefCell::new(EngineCore {
                snapshot: Arc::new(snapshot),
                queue: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// A view over the current snapshot.
    pub(crate) fn view(&self) -> StateView {
        let core = self.core.lock();
        let snapshot = Arc::clone(&core.borrow().snapshot);
        StateView::new(snapshot)
    }

    /// Register a callback invoked after every completed dispatch pass.
    pub(crate) fn subscribe(&self, subscriber: Subscriber) {
        self.subscribers.write().push(subscriber);
    }

    /// Dispatch one action through the pipeline.
    ///
    /// If a dispatch is already running on this engine, the action is queued
    /// and handled by the running drain loop after the current pass.
    pub(crate) fn dispatch(&self, action: Action) {
        let core = self.core.lock();
        {
            let mut state = core.borrow_mut();
            state.queue.push_back(action);
            if state.dispatching {
                tracing::trace!("Dispatch queued behind a running dispatch");
                return;
            }
            state.dispatching = true;
        }
        scopeguard::defer! {
            core.borrow_mut().dispatching = false;
        }

        loop {
            let action = match core.borrow_mut().queue.pop_front() {
                Some(action) => action,
                None => break,
            };
            tracing::debug!("Dispatching '{}'", action.kind);

            let previous = Arc::clone(&core.borrow().snapshot);
            let mut next = Snapshot::with_capacity(self.slices.len());
            for slice in &self.slices {
                let name = slice.name();
                let reduced = slice.reduce(previous.get(&name), &action);
                next.insert(name, reduced);
            }
            let next = Arc::new(next);
            core.borrow_mut().snapshot = Arc::clone(&next);

            let view = StateView::new(next);
            middleware::run_chain(&self.middleware, &action, &view);

            let subscribers: Vec<Subscriber> = self.subscribers.read().clone();
            for subscriber in &subscribers {
                subscriber(&view);
            }
        }
    }
}
