//! Action routing over named state slices.
//!
//! Named, serializable actions flow through a single dispatch entry point
//! into per-slice mutator tables, then out to side-effect listeners and
//! bound views:
//!
//! ```text
//! dispatch ──→ Slice mutators ──→ Listeners ──→ Middleware ──→ Containers
//!    ↑         (reduce phase)                                      │
//!    └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Slice**: one named region of global state with an action-kind →
//!   mutator table. Frozen once the app is assembled.
//! - **Listener**: a side-effect callback fired after the reduce phase for
//!   every action of its kind, in registration order.
//! - **Router**: aggregates slices and listeners at assembly time, builds the
//!   store, exposes `dispatch`.
//! - **Container**: couples state and dispatch mappings to a component that
//!   renders the result.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use railyard::{AppConfig, Component, Container, Listener, Router, Slice};
//! use serde_json::json;
//!
//! struct Display;
//!
//! impl Component for Display {
//!     type Props = i64;
//!     type Handlers = ();
//!
//!     fn render(&mut self, count: i64, _handlers: &()) {
//!         println!("count = {count}");
//!     }
//! }
//!
//! let counter = Slice::new("counter", json!({ "count": 0 }))?;
//! counter.handle("increment", |draft, _| {
//!     let count = draft["count"].as_i64().unwrap_or(0);
//!     draft["count"] = json!(count + 1);
//! })?;
//!
//! let router = Router::new();
//! let app = router.assemble(AppConfig {
//!     root: Container::new(
//!         |view| {
//!             view.slice("counter")
//!                 .ok()
//!                 .and_then(|counter| counter["count"].as_i64())
//!                 .unwrap_or(0)
//!         },
//!         |_dispatch| (),
//!         Display,
//!     ),
//!     slices: vec![counter],
//!     listeners: vec![Listener::new("increment", |_data, _view| {})],
//!     middleware: Vec::new(),
//! })?;
//! app.mount();
//!
//! router.signal("increment")?;
//! router.signal("increment")?;
//!
//! let view = app.view();
//! assert_eq!(view.slice("counter")?["count"], json!(2));
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod container;
mod engine;
pub mod error;
pub mod listener;
pub mod router;
pub mod slice;
pub mod state;

pub use action::Action;
pub use container::{Component, Container};
pub use engine::middleware::{ActionLog, Middleware};
pub use error::{ConfigurationError, Error, LifecycleError, StateError};
pub use listener::Listener;
pub use router::{App, AppConfig, Dispatch, Router};
pub use slice::Slice;
pub use state::StateView;
