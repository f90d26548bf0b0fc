// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for lazy-load operations

use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading content modules
///
/// A failing generation converts its error to a string at the hook boundary
/// and stores it in [`LoadState::error`](crate::LoadState); nothing is
/// propagated past the owning component.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A resource in the list failed to load
    #[error("Failed to load: {path}")]
    Resource { path: String },

    /// A loader backend failed before the failure could be attributed
    /// to a specific resource
    #[error("{message}")]
    Loader { message: String },
}

impl LoadError {
    /// Create a resource failure for the given identifier
    pub fn resource(path: impl Into<String>) -> Self {
        LoadError::Resource { path: path.into() }
    }

    /// Create a backend failure with a free-form message
    pub fn loader(message: impl Into<String>) -> Self {
        LoadError::Loader {
            message: message.into(),
        }
    }
}
