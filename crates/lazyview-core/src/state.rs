// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Load state exposed to components

use crate::content::ModuleMap;
use serde::{Deserialize, Serialize};

/// Data, error, and loading flags for one lazy-load input pair
///
/// Owned by the lazy-load hook; every transition happens through the named
/// constructors so the state machine stays in the shapes the contract allows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadState {
    /// Merged content of the last successful generation
    pub data: Option<ModuleMap>,
    /// Human-readable failure of the last settled generation
    pub error: Option<String>,
    /// Whether a generation is in flight
    pub loading: bool,
}

impl LoadState {
    /// Not visible, or nothing to load. Clears all three fields regardless
    /// of what a superseded generation left behind.
    pub fn idle() -> Self {
        LoadState::default()
    }

    /// A generation just started. Prior data stays visible during a reload;
    /// only the error is cleared.
    pub fn loading_from(prior: &LoadState) -> Self {
        LoadState {
            data: prior.data.clone(),
            error: None,
            loading: true,
        }
    }

    /// Every fetch succeeded.
    pub fn loaded(data: ModuleMap) -> Self {
        LoadState {
            data: Some(data),
            error: None,
            loading: false,
        }
    }

    /// A fetch failed. No partial data survives.
    pub fn failed(message: impl Into<String>) -> Self {
        LoadState {
            data: None,
            error: Some(message.into()),
            loading: false,
        }
    }
}
