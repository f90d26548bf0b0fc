//! Visibility and lazy-load hooks built on Leptos signals

use crate::loader::FetchLoader;
use crate::observer::{IntersectionSubscription, ObserverOptions};
use lazyview_core::{
    run_generation, LatchUpdate, Liveness, LoadState, ResourceLoader, VisibilityLatch,
};
use leptos::html::Div;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// Handle returned by [`use_element_observer`]
#[derive(Clone, Copy)]
pub struct ElementObserver {
    /// Bind this to the element to observe
    pub node_ref: NodeRef<Div>,
    /// Whether the element is currently considered visible
    pub in_view: ReadSignal<bool>,
}

/// Track whether the element behind a node ref has entered the viewport.
///
/// The node ref is read reactively, so the subscription is created as soon
/// as the element binds, even when that happens after the first effect run.
/// With the default `trigger_once` the first intersection latches visibility
/// and disconnects the platform observer permanently for this mount.
pub fn use_element_observer(options: ObserverOptions) -> ElementObserver {
    let node_ref = NodeRef::<Div>::new();
    let (in_view, set_in_view) = signal(false);
    let subscription = StoredValue::new_local(None::<IntersectionSubscription>);
    let liveness = Liveness::new();

    let effect_liveness = liveness.clone();
    Effect::new(move |_| {
        let Some(target) = node_ref.get() else {
            return;
        };

        // tear down any previous subscription before re-observing
        subscription.update_value(|slot| {
            slot.take();
        });

        let mut latch = VisibilityLatch::new(options.trigger_once);
        let guard = effect_liveness.clone();
        let observed = IntersectionSubscription::observe(
            &Element::from(target),
            &options,
            move |observer, record| {
                // discard events that arrive after teardown
                if !guard.is_live() {
                    return;
                }
                match latch.observe(&record) {
                    LatchUpdate::Latched => {
                        set_in_view.set(true);
                        observer.disconnect();
                    }
                    LatchUpdate::Changed => set_in_view.set(latch.is_visible()),
                    LatchUpdate::Unchanged => {}
                }
            },
        );

        match observed {
            Ok(sub) => subscription.set_value(Some(sub)),
            Err(err) => log::warn!("intersection observer unavailable: {:?}", err),
        }
    });

    // the stored subscription is dropped (and disconnected) with the owner
    on_cleanup(move || liveness.revoke());

    ElementObserver { node_ref, in_view }
}

/// Lazily load content modules once `in_view` becomes true, using the
/// default HTTP loader.
///
/// Returns the idle state while hidden or when `files` is empty; flips to
/// loading when visibility arrives, then settles to loaded or failed. A
/// visibility change supersedes any generation in flight.
pub fn use_lazy_load_data(files: Vec<String>, in_view: Signal<bool>) -> ReadSignal<LoadState> {
    use_lazy_load_data_with(Rc::new(FetchLoader), files, in_view)
}

/// Lazily load content modules with an injected loader backend.
///
/// The loader and the file list are fixed for the component's lifetime;
/// visibility is the reactive input.
pub fn use_lazy_load_data_with(
    loader: Rc<dyn ResourceLoader>,
    files: Vec<String>,
    in_view: Signal<bool>,
) -> ReadSignal<LoadState> {
    let (state, set_state) = signal(LoadState::idle());
    let generation = StoredValue::new_local(None::<Liveness>);
    let mount = Liveness::new();

    let apply_guard = mount.clone();
    Effect::new(move |_| {
        let visible = in_view.get();

        // supersede whatever generation is still in flight
        generation.update_value(|slot| {
            if let Some(prev) = slot.take() {
                prev.revoke();
            }
        });

        if !visible || files.is_empty() {
            set_state.set(LoadState::idle());
            return;
        }

        let liveness = Liveness::new();
        generation.set_value(Some(liveness.clone()));

        let loader = Rc::clone(&loader);
        let files = files.clone();
        let prior = state.get_untracked();
        let guard = apply_guard.clone();
        spawn_local(async move {
            run_generation(loader.as_ref(), &files, prior, &liveness, move |next| {
                if guard.is_live() {
                    set_state.set(next);
                }
            })
            .await;
        });
    });

    on_cleanup(move || mount.revoke());

    state
}
