// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wrapper class-name derivation

/// Default class applied once the wrapper has been seen
pub const AFTER_VISIBLE_CLASS: &str = "visible_wrapper";

/// Default class applied before the wrapper is seen when animating
pub const INITIAL_WRAPPER_CLASS: &str = "invisible_wrapper";

/// Class-name configuration for the wrapper element
///
/// The effective class is derived on every render, never stored: animation
/// off means the wrapper stays unclassed no matter what visibility does.
#[derive(Clone, Debug, PartialEq)]
pub struct WrapperClasses {
    /// Whether visibility drives a class change at all
    pub animate: bool,
    /// Class applied while visible
    pub after_visible: String,
    /// Class applied before the first intersection (empty when not animating)
    pub initial: String,
}

impl WrapperClasses {
    /// Default configuration for the given animation flag.
    pub fn new(animate: bool) -> Self {
        WrapperClasses {
            animate,
            after_visible: AFTER_VISIBLE_CLASS.to_string(),
            initial: if animate {
                INITIAL_WRAPPER_CLASS.to_string()
            } else {
                String::new()
            },
        }
    }

    /// Class for the current visibility, honoring a per-instance override.
    pub fn class_for<'a>(&'a self, visible: bool, override_class: Option<&'a str>) -> &'a str {
        if self.animate && visible {
            override_class.unwrap_or(&self.after_visible)
        } else {
            &self.initial
        }
    }
}

impl Default for WrapperClasses {
    fn default() -> Self {
        WrapperClasses::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_off_always_yields_the_empty_class() {
        let classes = WrapperClasses::new(false);
        assert_eq!(classes.class_for(false, None), "");
        assert_eq!(classes.class_for(true, None), "");
        assert_eq!(classes.class_for(true, Some("slide_in")), "");
    }

    #[test]
    fn animated_wrapper_switches_class_on_visibility() {
        let classes = WrapperClasses::new(true);
        assert_eq!(classes.class_for(false, None), "invisible_wrapper");
        assert_eq!(classes.class_for(true, None), "visible_wrapper");
    }

    #[test]
    fn per_instance_override_beats_the_configured_class() {
        let classes = WrapperClasses::new(true);
        assert_eq!(classes.class_for(true, Some("slide_in")), "slide_in");
        // the override only applies while visible
        assert_eq!(classes.class_for(false, Some("slide_in")), "invisible_wrapper");
    }

    #[test]
    fn custom_classes_replace_the_defaults() {
        let classes = WrapperClasses {
            animate: true,
            after_visible: "shown".to_string(),
            initial: "hidden".to_string(),
        };
        assert_eq!(classes.class_for(true, None), "shown");
        assert_eq!(classes.class_for(false, None), "hidden");
    }
}
