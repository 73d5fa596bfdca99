mod common;

use railyard::{AppConfig, Router, Slice};
use serde::Deserialize;
use serde_json::json;

#[test]
fn increment_twice_reaches_two() {
    common::init_tracing();
    let router = Router::new();
    let app = router
        .assemble(AppConfig {
            root: common::noop_container(),
            slices: vec![common::counter_slice()],
            listeners: Vec::new(),
            middleware: Vec::new(),
        })
        .unwrap();

    router.signal("INCREMENT").unwrap();
    router.signal("INCREMENT").unwrap();

    let view = app.view();
    assert_eq!(view.slice("counter").unwrap(), &json!({ "count": 2 }));
}

#[test]
fn unrelated_dispatch_leaves_other_slices_pointer_stable() {
    let bystander = Slice::new("session", json!({ "user": "nobody" })).unwrap();
    let router = Router::new();
    let app = router
        .assemble(AppConfig {
            root: common::noop_container(),
            slices: vec![common::counter_slice(), bystander],
            listeners: Vec::new(),
            middleware: Vec::new(),
        })
        .unwrap();

    let before = app.view();
    router.signal("INCREMENT").unwrap();
    let after = app.view();

    assert!(std::ptr::eq(
        before.slice("session").unwrap(),
        after.slice("session").unwrap()
    ));
    assert!(!std::ptr::eq(
        before.slice("counter").unwrap(),
        after.slice("counter").unwrap()
    ));
}

#[test]
fn dispatch_with_no_matching_mutator_changes_nothing() {
    let router = Router::new();
    let app = router
        .assemble(AppConfig {
            root: common::noop_container(),
            slices: vec![common::counter_slice()],
            listeners: Vec::new(),
            middleware: Vec::new(),
        })
        .unwrap();

    let before = app.view();
    router.signal("UNKNOWN").unwrap();
    let after = app.view();

    assert!(std::ptr::eq(
        before.slice("counter").unwrap(),
        after.slice("counter").unwrap()
    ));
}

#[test]
fn typed_accessor_deserializes_the_slice() {
    #[derive(Deserialize)]
    struct Counter {
        count: i64,
    }

    let router = Router::new();
    let app = router
        .assemble(AppConfig {
            root: common::noop_container(),
            slices: vec![common::counter_slice()],
            listeners: Vec::new(),
            middleware: Vec::new(),
        })
        .unwrap();

    router.signal("INCREMENT").unwrap();

    let counter: Counter = app.view().slice_as("counter").unwrap();
    assert_eq!(counter.count, 1);
}

#[test]
fn mutator_receives_the_dispatched_payload() {
    let names = Slice::new("names", json!([])).unwrap();
    names
        .handle("ADD_NAME", |draft, data| {
            draft.as_array_mut().unwrap().push(data.clone());
        })
        .unwrap();

    let router = Router::new();
    let app = router
        .assemble(AppConfig {
            root: common::noop_container(),
            slices: vec![names],
            listeners: Vec::new(),
            middleware: Vec::new(),
        })
        .unwrap();

    router.dispatch("ADD_NAME", "alice").unwrap();
    router.dispatch("ADD_NAME", "bob").unwrap();

    assert_eq!(app.view().slice("names").unwrap(), &json!(["alice", "bob"]));
}
