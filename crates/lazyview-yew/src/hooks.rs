//! Visibility and lazy-load hooks

use crate::loader::FetchLoader;
use crate::observer::{IntersectionSubscription, ObserverOptions};
use lazyview_core::{
    run_generation, LatchUpdate, Liveness, LoadState, ResourceLoader, VisibilityLatch,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

/// Handle returned by [`use_element_observer`]
#[derive(Clone, PartialEq)]
pub struct ElementObserver {
    /// Bind this to the element to observe
    pub node_ref: NodeRef,
    /// Whether the element is currently considered visible
    pub in_view: bool,
}

/// Track whether the element behind a node ref has entered the viewport.
///
/// The subscription is re-created whenever `options` change; with the
/// default `trigger_once` the first intersection latches visibility and
/// disconnects the platform observer permanently for this mount.
///
/// A node ref with no element when the effect runs observes nothing until
/// the options change.
#[hook]
pub fn use_element_observer(options: ObserverOptions) -> ElementObserver {
    let node_ref = use_node_ref();
    let in_view = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let in_view = in_view.clone();
        use_effect_with(options, move |options| {
            let liveness = Liveness::new();
            let mut latch = VisibilityLatch::new(options.trigger_once);

            let subscription = node_ref.cast::<Element>().and_then(|target| {
                let guard = liveness.clone();
                IntersectionSubscription::observe(&target, options, move |observer, record| {
                    // discard events that arrive after teardown
                    if !guard.is_live() {
                        return;
                    }
                    match latch.observe(&record) {
                        LatchUpdate::Latched => {
                            in_view.set(true);
                            observer.disconnect();
                        }
                        LatchUpdate::Changed => in_view.set(latch.is_visible()),
                        LatchUpdate::Unchanged => {}
                    }
                })
                .map_err(|err| log::warn!("intersection observer unavailable: {:?}", err))
                .ok()
            });

            move || {
                liveness.revoke();
                drop(subscription);
            }
        });
    }

    ElementObserver {
        node_ref,
        in_view: *in_view,
    }
}

/// Lazily load content modules once `in_view` becomes true, using the
/// default HTTP loader.
///
/// Returns the idle state while hidden or when `files` is empty; flips to
/// loading when the element enters the viewport, then settles to loaded or
/// failed. A change to either input supersedes any generation in flight.
#[hook]
pub fn use_lazy_load_data(files: Rc<Vec<String>>, in_view: bool) -> LoadState {
    use_lazy_load_data_with(Rc::new(FetchLoader), files, in_view)
}

/// Lazily load content modules with an injected loader backend.
///
/// The loader is fixed for the component's lifetime; only the `files`
/// identity and `in_view` participate in generation keying.
#[hook]
pub fn use_lazy_load_data_with(
    loader: Rc<dyn ResourceLoader>,
    files: Rc<Vec<String>>,
    in_view: bool,
) -> LoadState {
    let state = use_state_eq(LoadState::idle);

    {
        let state = state.clone();
        use_effect_with((files, in_view), move |(files, in_view)| {
            let liveness = Liveness::new();

            if !*in_view || files.is_empty() {
                state.set(LoadState::idle());
            } else {
                let generation = liveness.clone();
                let files = Rc::clone(files);
                let prior = (*state).clone();
                let apply = move |next| state.set(next);
                spawn_local(async move {
                    run_generation(loader.as_ref(), &files, prior, &generation, apply).await;
                });
            }

            move || liveness.revoke()
        });
    }

    (*state).clone()
}
