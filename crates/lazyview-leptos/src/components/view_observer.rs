//! Drop-in wrapper component composing visibility tracking and lazy loading

use crate::hooks::{use_element_observer, use_lazy_load_data};
use crate::observer::ObserverOptions;
use lazyview_core::{LoadState, WrapperClasses, AFTER_VISIBLE_CLASS, DEFAULT_ROOT_MARGIN};
use leptos::prelude::*;
use web_sys::Element;

/// Configuration for [`ViewObserver`]
#[derive(Clone, Debug, PartialEq)]
pub struct ViewObserverOptions {
    /// Drive the wrapper class from visibility
    pub animate: bool,
    /// Class applied while visible
    pub after_wrapper_is_visible_class: String,
    /// Class applied before visibility; defaults to `"invisible_wrapper"`
    /// when animating, empty otherwise
    pub initial_wrapper_class: Option<String>,
    /// Margin around the observation root
    pub root_margin: String,
    /// Visibility threshold in `[0, 1]`
    pub threshold: f64,
    /// Observation root; `None` observes against the viewport
    pub root: Option<Element>,
    /// Latch visibility on the first intersection
    pub trigger_once: bool,
    /// Load `files` once visible and provide them through [`LazyContent`]
    pub lazy_load: bool,
    /// Resource identifiers to load lazily
    pub files: Vec<String>,
}

impl Default for ViewObserverOptions {
    fn default() -> Self {
        ViewObserverOptions {
            animate: false,
            after_wrapper_is_visible_class: AFTER_VISIBLE_CLASS.to_string(),
            initial_wrapper_class: None,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            threshold: 0.0,
            root: None,
            trigger_once: true,
            lazy_load: false,
            files: Vec::new(),
        }
    }
}

impl ViewObserverOptions {
    fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            root_margin: self.root_margin.clone(),
            threshold: self.threshold,
            trigger_once: self.trigger_once,
            root: self.root.clone(),
        }
    }

    fn wrapper_classes(&self) -> WrapperClasses {
        let defaults = WrapperClasses::new(self.animate);
        WrapperClasses {
            animate: self.animate,
            after_visible: self.after_wrapper_is_visible_class.clone(),
            initial: self
                .initial_wrapper_class
                .clone()
                .unwrap_or(defaults.initial),
        }
    }
}

/// Lazily loaded content provided to decorated children
#[derive(Clone, Copy)]
pub struct LazyContent(pub ReadSignal<LoadState>);

/// Read the lazy content provided by the nearest [`ViewObserver`].
pub fn use_lazy_content() -> Option<LazyContent> {
    use_context::<LazyContent>()
}

/// Wrap content with visibility-driven presentation and optional lazy
/// loading.
///
/// Renders a single `<div>` bound to the observation node ref and classed
/// from the visibility state. Children render inside it unconditionally and
/// read the load state through [`use_lazy_content`], load failure or not.
#[component]
pub fn ViewObserver(
    /// Decorator configuration
    #[prop(optional)]
    options: ViewObserverOptions,
    /// Per-instance class used instead of the visible class while animating
    #[prop(optional)]
    special_animation: Option<String>,
    /// Inline style passthrough for the wrapper element
    #[prop(optional)]
    style: Option<String>,
    children: Children,
) -> impl IntoView {
    let observer = use_element_observer(options.observer_options());
    let in_view = observer.in_view;

    let lazy_load = options.lazy_load;
    let files = if lazy_load {
        options.files.clone()
    } else {
        Vec::new()
    };
    // Pinning visibility to false when lazy loading is off synthesizes the
    // constant idle state.
    let load = use_lazy_load_data(files, Signal::derive(move || in_view.get() && lazy_load));
    provide_context(LazyContent(load));

    let classes = options.wrapper_classes();
    let wrapper_class = move || {
        classes
            .class_for(in_view.get(), special_animation.as_deref())
            .to_string()
    };

    view! {
        <div node_ref=observer.node_ref class=wrapper_class style=style.unwrap_or_default()>
            {children()}
        </div>
    }
}
