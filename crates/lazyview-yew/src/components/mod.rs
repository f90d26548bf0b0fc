//! Yew components

mod view_observer;

pub use view_observer::{ViewContent, ViewObserver, ViewObserverOptions, ViewObserverProps};
