//! Drop-in wrapper component composing visibility tracking and lazy loading

use crate::hooks::{use_element_observer, use_lazy_load_data};
use crate::observer::ObserverOptions;
use lazyview_core::{LoadState, WrapperClasses, AFTER_VISIBLE_CLASS, DEFAULT_ROOT_MARGIN};
use web_sys::Element;
use yew::prelude::*;

/// Decorated-component props that can receive lazily loaded content
///
/// The default implementation keeps the props unchanged, so components
/// without lazy content opt in with an empty `impl`.
pub trait ViewContent: Sized {
    /// Merge loaded content into these props. The injected content, error,
    /// and loading values always win over caller-supplied ones.
    fn with_content(self, state: &LoadState) -> Self {
        let _ = state;
        self
    }
}

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
    /// Load `files` once visible and inject them into the wrapped props
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

/// Props for [`ViewObserver`]
#[derive(Properties, PartialEq)]
pub struct ViewObserverProps<P: PartialEq> {
    /// Decorator configuration
    #[prop_or_default]
    pub options: ViewObserverOptions,
    /// Props forwarded to the decorated component
    pub inner: P,
    /// Per-instance class used instead of the visible class while animating
    #[prop_or_default]
    pub special_animation: Option<AttrValue>,
    /// Inline style passthrough for the wrapper element
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Wrap a component with visibility-driven presentation and optional lazy
/// content.
///
/// Renders a single `<div>` bound to the observation node ref and classed
/// from the visibility state; the wrapped component renders inside it
/// unconditionally, load failure or not.
#[function_component]
pub fn ViewObserver<C>(props: &ViewObserverProps<C::Properties>) -> Html
where
    C: BaseComponent,
    C::Properties: ViewContent + Clone + PartialEq,
{
    let options = &props.options;
    let observer = use_element_observer(options.observer_options());

    let files = use_memo(options.files.clone(), |files| files.clone());
    // Pinning visibility to false when lazy loading is off keeps the hook
    // order stable and synthesizes the constant idle state.
    let load = use_lazy_load_data(files, observer.in_view && options.lazy_load);

    let classes = options.wrapper_classes();
    let wrapper_class = classes
        .class_for(observer.in_view, props.special_animation.as_deref())
        .to_string();

    let inner = if options.lazy_load {
        props.inner.clone().with_content(&load)
    } else {
        props.inner.clone()
    };

    html! {
        <div ref={observer.node_ref.clone()} class={wrapper_class} style={props.style.clone()}>
            <C ..inner />
        </div>
    }
}
