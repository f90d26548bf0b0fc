// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LazyView Core - Visibility-tracking and lazy-load state machines
//!
//! This crate provides the framework-free building blocks behind the LazyView
//! hooks and wrapper components. It owns the behavioral contracts (visibility
//! latching, load-generation sequencing, content merging) while the framework
//! crates supply the browser glue, so everything here is testable on the host
//! without a browser-like environment.
//!
//! # Architecture
//!
//! - [`VisibilityLatch`] - edge-triggered visibility state for one observed
//!   element, with one-shot latching
//! - [`ResourceLoader`] - collaborator trait for fetching content modules
//! - [`run_generation`] - one fetch-and-merge attempt for a resource list,
//!   gated by a [`Liveness`] token
//! - [`LoadState`] - the data/error/loading triple exposed to components
//! - [`WrapperClasses`] - class-name derivation for the wrapper element
//!
//! # Example
//!
//! ```ignore
//! use lazyview_core::{run_generation, Liveness, LoadState, ResourceLoader};
//!
//! let liveness = Liveness::new();
//! run_generation(&loader, &files, LoadState::idle(), &liveness, |state| {
//!     render(state);
//! })
//! .await;
//! ```

pub mod content;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod observer;
pub mod presentation;
pub mod state;

// Re-export all public types
pub use content::*;
pub use error::*;
pub use lifecycle::*;
pub use loader::*;
pub use observer::*;
pub use presentation::*;
pub use state::*;
