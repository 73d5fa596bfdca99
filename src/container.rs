//! View bindings.
//!
//! A [`Container`] couples a state-mapping closure and a dispatch-mapping
//! closure to a [`Component`]. The component is the seam to whatever actually
//! renders: this crate never draws anything, it only recomputes props from
//! fresh snapshots and hands them over after every dispatch.

use crate::router::Dispatch;
use crate::state::StateView;

/// The external view seam: something that renders given props.
pub trait Component {
    /// Data derived from the state snapshot on every render pass.
    type Props;
    /// Dispatch-bound callbacks, built once when the container first renders.
    type Handlers;

    fn render(&mut self, props: Self::Props, handlers: &Self::Handlers);
}

/// A component bound to the store.
pub struct Container {
    bound: Box<dyn FnMut(&StateView, &Dispatch) + Send>,
}

impl Container {
    /// Bind `component` to the store.
    ///
    /// `map_state` runs against a fresh view on every render pass;
    /// `map_dispatch` runs once, on the first render, to build the
    /// component's dispatch-bound handlers.
    pub fn new<C, MS, MD>(map_state: MS, map_dispatch: MD, mut component: C) -> Self
    where
        C: Component + Send + 'static,
        C::Handlers: Send,
        MS: Fn(&StateView) -> C::Props + Send + 'static,
        MD: Fn(Dispatch) -> C::Handlers + Send + 'static,
    {
        let mut handlers: Option<C::Handlers> = None;
        Self {
            bound: Box::new(move |view, dispatch| {
                let handlers = handlers.get_or_insert_with(|| map_dispatch(dispatch.clone()));
                component.render(map_state(view), handlers);
            }),
        }
    }

    pub(crate) fn render(&mut self, view: &StateView, dispatch: &Dispatch) {
        (self.bound)(view, dispatch);
    }
}
