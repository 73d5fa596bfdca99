//! Shared test utilities.

#![allow(dead_code)]

use std::sync::Once;

use railyard::{Component, Container, Slice};
use serde_json::json;

static INIT: Once = Once::new();

/// Install a tracing subscriber once for the whole test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A component that renders nothing, for tests that only exercise routing.
pub struct NullView;

impl Component for NullView {
    type Props = ();
    type Handlers = ();

    fn render(&mut self, _props: (), _handlers: &()) {}
}

pub fn noop_container() -> Container {
    Container::new(|_view| (), |_dispatch| (), NullView)
}

/// A "counter" slice with an "INCREMENT" mutator.
pub fn counter_slice() -> Slice {
    let slice = Slice::new("counter", json!({ "count": 0 })).unwrap();
    slice
        .handle("INCREMENT", |draft, _| {
            let count = draft["count"].as_i64().unwrap();
            draft["count"] = json!(count + 1);
        })
        .unwrap();
    slice
}
