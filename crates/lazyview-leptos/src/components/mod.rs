//! Leptos components

mod view_observer;

pub use view_observer::{use_lazy_content, LazyContent, ViewObserver, ViewObserverOptions};
