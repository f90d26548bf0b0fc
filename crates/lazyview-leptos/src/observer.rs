//! IntersectionObserver subscription for Leptos components

use lazyview_core::{IntersectionRecord, ObservationConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observation options with a browser element as the root type
pub type ObserverOptions = ObservationConfig<Element>;

/// An active observation of one element
///
/// Owns the platform observer, the observed target, and the JS listener
/// closure. Dropping the subscription unobserves the target and disconnects
/// the observer; events still queued behind the disconnect are discarded by
/// the owning hook's liveness guard.
pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    target: Element,
    _listener: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionSubscription {
    /// Observe `target` with the given options.
    ///
    /// `on_record` receives the first entry of each callback batch together
    /// with the observer, so a latching callback can disconnect it.
    pub fn observe(
        target: &Element,
        options: &ObserverOptions,
        mut on_record: impl FnMut(&IntersectionObserver, IntersectionRecord) + 'static,
    ) -> Result<Self, JsValue> {
        let listener = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                    let record = IntersectionRecord {
                        is_intersecting: entry.is_intersecting(),
                        intersection_ratio: entry.intersection_ratio(),
                    };
                    on_record(&observer, record);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root(options.root.as_ref());
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));

        let observer =
            IntersectionObserver::new_with_options(listener.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(IntersectionSubscription {
            observer,
            target: target.clone(),
            _listener: listener,
        })
    }
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        // unobserve the target, then cancel the subscription entirely
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}
