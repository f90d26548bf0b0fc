// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observation configuration and the visibility latch
//!
//! The latch is the only stateful part of visibility tracking. Framework
//! adapters feed it intersection records from the platform observer and act
//! on the returned [`LatchUpdate`]; the latch itself never touches the
//! observer, which keeps the one-shot contract testable without a browser.

use serde::{Deserialize, Serialize};

/// Default margin around the observation root
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

/// Configuration for a visibility observation subscription
///
/// `R` is the host framework's element type used for the observation root;
/// the core never inspects it. The whole struct is compared for equality to
/// decide whether a subscription must be torn down and re-created.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationConfig<R = ()> {
    /// Margin around the root, in CSS margin syntax
    pub root_margin: String,
    /// Fraction of the target that must be visible, in `[0, 1]`
    pub threshold: f64,
    /// Latch on the first intersection and stop observing
    pub trigger_once: bool,
    /// Viewport element; `None` observes against the browser viewport
    pub root: Option<R>,
}

impl<R> Default for ObservationConfig<R> {
    fn default() -> Self {
        ObservationConfig {
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            threshold: 0.0,
            trigger_once: true,
            root: None,
        }
    }
}

impl<R> ObservationConfig<R> {
    /// Threshold clamped to the `[0, 1]` range the platform accepts.
    pub fn clamped_threshold(&self) -> f64 {
        self.threshold.clamp(0.0, 1.0)
    }
}

/// A single observation event for one target
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionRecord {
    /// Whether the target intersects the root region
    pub is_intersecting: bool,
    /// Fraction of the target currently inside the root region
    pub intersection_ratio: f64,
}

/// Result of feeding one record to the latch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchUpdate {
    /// Visibility did not change
    Unchanged,
    /// Visibility changed; read the new value from the latch
    Changed,
    /// Visibility latched on; the adapter must stop the observation
    Latched,
}

/// Edge-triggered visibility state for one observed element
///
/// With `trigger_once`, the first intersecting record sets visibility and
/// returns [`LatchUpdate::Latched`]; every record after that is ignored,
/// including events already in flight when the adapter disconnects. Without
/// `trigger_once`, visibility mirrors the most recent record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityLatch {
    trigger_once: bool,
    visible: bool,
    latched: bool,
}

impl VisibilityLatch {
    /// Create a hidden latch.
    pub fn new(trigger_once: bool) -> Self {
        VisibilityLatch {
            trigger_once,
            visible: false,
            latched: false,
        }
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Process one intersection record.
    pub fn observe(&mut self, record: &IntersectionRecord) -> LatchUpdate {
        if self.latched {
            return LatchUpdate::Unchanged;
        }

        if record.is_intersecting {
            if self.trigger_once {
                self.visible = true;
                self.latched = true;
                return LatchUpdate::Latched;
            }
            if !self.visible {
                self.visible = true;
                return LatchUpdate::Changed;
            }
        } else if !self.trigger_once && self.visible {
            self.visible = false;
            return LatchUpdate::Changed;
        }

        LatchUpdate::Unchanged
    }
}
