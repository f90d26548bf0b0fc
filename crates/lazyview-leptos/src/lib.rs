//! LazyView Leptos bindings
//!
//! Leptos hooks for visibility observation and lazy content loading, plus
//! the drop-in [`ViewObserver`] wrapper component. Decorated children read
//! the loaded content through the [`LazyContent`] context.

pub mod components;
pub mod hooks;
pub mod loader;
pub mod observer;

// Re-exports
pub use components::{use_lazy_content, LazyContent, ViewObserver, ViewObserverOptions};
pub use hooks::{use_element_observer, use_lazy_load_data, use_lazy_load_data_with, ElementObserver};
pub use lazyview_core::{LoadState, LocalBoxFuture, ModuleMap, ResourceLoader};
pub use loader::{FetchLoader, ModuleLoader};
pub use observer::{IntersectionSubscription, ObserverOptions};
