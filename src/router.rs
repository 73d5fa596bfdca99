//! The router facade and the assembled application.
//!
//! A [`Router`] aggregates slices, listeners, and middleware at assembly
//! time, builds the store engine, and exposes the single dispatch entry
//! point. Dispatch before assembly is a lifecycle error; the [`Dispatch`]
//! handle can still be created and passed around early, it just fails at
//! call time until the app exists.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use crate::action::Action;
use crate::container::Container;
use crate::engine::middleware::{Middleware, NotificationMiddleware};
use crate::engine::StoreEngine;
use crate::error::{ConfigurationError, LifecycleError};
use crate::listener::{Listener, ListenerRegistry};
use crate::slice::Slice;
use crate::state::StateView;

/// Everything an application is assembled from.
///
/// An explicit configuration structure: construct it literally and hand it to
/// [`Router::assemble`].
pub struct AppConfig {
    /// The root container, re-rendered after every dispatch once mounted.
    pub root: Container,
    /// All slices; names must be unique.
    pub slices: Vec<Slice>,
    /// Side-effect listeners, invoked in registration order.
    pub listeners: Vec<Listener>,
    /// User middleware, run after listener notification in the given order.
    pub middleware: Vec<Box<dyn Middleware>>,
}

/// Facade over one application's routing: assembly plus dispatch.
///
/// Construct one per application and pass it explicitly; there is no global
/// default instance.
#[derive(Clone, Default)]
pub struct Router {
    inner: Arc<RwLock<RouterInner>>,
}

#[derive(Default)]
struct RouterInner {
    engine: Option<Arc<StoreEngine>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch an action with a payload.
    ///
    /// Synchronous: the reduce phase, listener notification, middleware, and
    /// subscriber re-render all complete before this returns. A dispatch
    /// issued from inside a listener is queued and runs after the current
    /// pass, never interleaved.
    pub fn dispatch(&self, kind: impl Into<String>, data: impl Into<Value>) -> Result<(), LifecycleError> {
        let engine = self.engine()?;
        engine.dispatch(Action::new(kind, data));
        Ok(())
    }

    /// Dispatch a payload-less action.
    pub fn signal(&self, kind: impl Into<String>) -> Result<(), LifecycleError> {
        self.dispatch(kind, Value::Null)
    }

    /// A clone-cheap dispatch handle for containers and listeners.
    pub fn dispatcher(&self) -> Dispatch {
        Dispatch {
            router: self.clone(),
        }
    }

    /// Build the application: freeze slices, install listeners and
    /// middleware, construct the store engine.
    ///
    /// Fails on duplicate slice names, in which case nothing is frozen and no
    /// engine is created. Calling this twice builds a second, independent
    /// store and points this router's dispatch at it; callers are expected to
    /// assemble exactly once per process lifetime.
    pub fn assemble(&self, config: AppConfig) -> Result<App, ConfigurationError> {
        let AppConfig {
            root,
            slices,
            listeners,
            middleware,
        } = config;

        let mut names = HashSet::with_capacity(slices.len());
        for slice in &slices {
            let name = slice.name();
            if !names.insert(name.clone()) {
                return Err(ConfigurationError::DuplicateSlice { name });
            }
        }

        for slice in &slices {
            slice.mark_assembled();
        }

        let listener_count = listeners.len();
        let mut registry = ListenerRegistry::default();
        for listener in listeners {
            registry.register(listener);
        }

        // Listener notification always observes the action before any user
        // middleware.
        let mut chain: Vec<Box<dyn Middleware>> = Vec::with_capacity(middleware.len() + 1);
        chain.push(Box::new(NotificationMiddleware::new(registry)));
        chain.extend(middleware);

        let engine = Arc::new(StoreEngine::new(slices, chain));
        {
            let mut inner = self.inner.write();
            if inner.engine.is_some() {
                tracing::warn!(
                    "Router assembled more than once; the previous store keeps running independently"
                );
            }
            inner.engine = Some(Arc::clone(&engine));
        }
        tracing::info!(
            "Assembled app: {} slices, {} listeners",
            names.len(),
            listener_count
        );

        Ok(App {
            engine,
            root: Arc::new(Mutex::new(root)),
            dispatch: self.dispatcher(),
            mounted: AtomicBool::new(false),
        })
    }

    fn engine(&self) -> Result<Arc<StoreEngine>, LifecycleError> {
        match &self.inner.read().engine {
            Some(engine) => Ok(Arc::clone(engine)),
            None => Err(LifecycleError::NotAssembled),
        }
    }
}

/// Clone-cheap dispatch handle bound to a router.
#[derive(Clone)]
pub struct Dispatch {
    router: Router,
}

impl Dispatch {
    /// See [`Router::dispatch`].
    pub fn dispatch(&self, kind: impl Into<String>, data: impl Into<Value>) -> Result<(), LifecycleError> {
        self.router.dispatch(kind, data)
    }

    /// See [`Router::signal`].
    pub fn signal(&self, kind: impl Into<String>) -> Result<(), LifecycleError> {
        self.router.signal(kind)
    }
}

/// The assembled application: the store plus the root container.
///
/// Lives for the process lifetime; there is no teardown API. Dropping the app
/// and its router destroys the store.
pub struct App {
    engine: Arc<StoreEngine>,
    root: Arc<Mutex<Container>>,
    dispatch: Dispatch,
    mounted: AtomicBool,
}

impl App {
    /// Render the root container once and subscribe it to the store, so it
    /// re-renders after every dispatch. Idempotent.
    pub fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::warn!("App already mounted; ignoring");
            return;
        }
        let view = self.engine.view();
        self.root.lock().render(&view, &self.dispatch);

        let root = Arc::clone(&self.root);
        let dispatch = self.dispatch.clone();
        self.engine.subscribe(Arc::new(move |view: &StateView| {
            root.lock().render(view, &dispatch);
        }));
    }

    /// The dispatch handle bound to this app's router.
    pub fn dispatcher(&self) -> Dispatch {
        self.dispatch.clone()
    }

    /// A read-only view over the current state snapshot.
    pub fn view(&self) -> StateView {
        self.engine.view()
    }
}
