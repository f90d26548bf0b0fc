//! LazyView Yew bindings
//!
//! Yew hooks for visibility observation and lazy content loading, plus the
//! drop-in [`ViewObserver`] wrapper component composing both.

pub mod components;
pub mod hooks;
pub mod loader;
pub mod observer;

// Re-exports
pub use components::{ViewContent, ViewObserver, ViewObserverOptions, ViewObserverProps};
pub use hooks::{use_element_observer, use_lazy_load_data, use_lazy_load_data_with, ElementObserver};
pub use lazyview_core::{LoadState, LocalBoxFuture, ModuleMap, ResourceLoader};
pub use loader::{FetchLoader, ModuleLoader};
pub use observer::{IntersectionSubscription, ObserverOptions};
