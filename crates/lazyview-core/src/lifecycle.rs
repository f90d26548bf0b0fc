// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lifecycle-scoped cancellation token

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token owned by a lifecycle scope.
///
/// A `Liveness` is created when a scope (an effect run, a load generation)
/// starts and revoked exactly once when the scope ends. Clones share the
/// underlying flag, so a clone captured by an asynchronous callback observes
/// the revocation. Every state mutation that happens after an await point
/// must be preceded by an [`is_live`](Liveness::is_live) check; revocation
/// does not terminate the underlying asynchronous work, it only discards
/// its results.
///
/// The flag is atomic so the token can cross the `Send` bounds of host
/// frameworks; on the single-threaded wasm event loop relaxed ordering is
/// all that is needed.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    /// Create a live token.
    pub fn new() -> Self {
        Liveness(Arc::new(AtomicBool::new(true)))
    }

    /// Whether the owning scope is still active.
    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// End the owning scope. Idempotent.
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Liveness::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let liveness = Liveness::new();
        let witness = liveness.clone();
        assert!(witness.is_live());

        liveness.revoke();
        assert!(!witness.is_live());

        // revoking again is a no-op
        witness.revoke();
        assert!(!liveness.is_live());
    }
}
