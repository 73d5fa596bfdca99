mod common;

use std::sync::Arc;

use parking_lot::Mutex;
use railyard::{Action, ActionLog, AppConfig, Listener, Middleware, Router, StateView};

struct Recorder {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
    pass_through: bool,
}

impl Middleware for Recorder {
    fn handle(&self, action: &Action, view: &StateView, next: &mut dyn FnMut(&Action, &StateView)) {
        self.log.lock().push(self.name);
        if self.pass_through {
            next(action, view);
        }
    }
}

#[test]
fn listeners_run_before_user_middleware() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let listener = {
        let log = Arc::clone(&log);
        Listener::new("ping", move |_, _| log.lock().push("listener"))
    };

    let router = Router::new();
    let _app = router
        .assemble(AppConfig {
            root: common::noop_container(),
            slices: Vec::new(),
            listeners: vec![listener],
            middleware: vec![Box::new(Recorder {
                name: "middleware",
                log: Arc::clone(&log),
                pass_through: true,
            })],
        })
        .unwrap();

    router.signal("ping").unwrap();
    assert_eq!(*log.lock(), vec!["listener", "middleware"]);
}

#[test]
fn middleware_that_skips_next_stops_later_middleware_but_not_rendering() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let renders = Arc::new(Mutex::new(0u32));

    struct CountingView {
        renders: Arc<Mutex<u32>>,
    }
    impl railyard::Component for CountingView {
        type Props = ();
        type Handlers = ();
        fn render(&mut self, _props: (), _handlers: &()) {
            *self.renders.lock() += 1;
        }
    }

    let router = Router::new();
    let app = router
        .assemble(AppConfig {
            root: railyard::Container::new(
                |_view| (),
                |_dispatch| (),
                CountingView {
                    renders: Arc::clone(&renders),
                },
            ),
            slices: Vec::new(),
            listeners: Vec::new(),
            middleware: vec![
                Box::new(Recorder {
                    name: "blocker",
                    log: Arc::clone(&log),
                    pass_through: false,
                }),
                Box::new(Recorder {
                    name: "unreached",
                    log: Arc::clone(&log),
                    pass_through: true,
                }),
            ],
        })
        .unwrap();
    app.mount();
    assert_eq!(*renders.lock(), 1);

    router.signal("ping").unwrap();
    assert_eq!(*log.lock(), vec!["blocker"]);
    assert_eq!(*renders.lock(), 2);
}

#[test]
fn action_log_middleware_passes_actions_through() {
    common::init_tracing();
    let router = Router::new();
    let app = router
        .assemble(AppConfig {
            root: common::noop_container(),
            slices: vec![common::counter_slice()],
            listeners: Vec::new(),
            middleware: vec![Box::new(ActionLog)],
        })
        .unwrap();

    router.signal("INCREMENT").unwrap();
    assert_eq!(
        app.view().slice("counter").unwrap()["count"],
        serde_json::json!(1)
    );
}
