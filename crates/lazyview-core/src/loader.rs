// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resource loading driver
//!
//! One generation is one complete attempt at fetching and merging a resource
//! list. All fetches are dispatched concurrently; a single failure aborts the
//! generation with no partial data. Results of a superseded generation are
//! discarded through the [`Liveness`] token, not by aborting the fetches.

use crate::content::{merge_modules, ModuleMap};
use crate::error::{LoadError, Result};
use crate::lifecycle::Liveness;
use crate::state::LoadState;
use futures_util::future::try_join_all;
use serde_json::Value;

pub use futures_core::future::LocalBoxFuture;

/// Collaborator that resolves a resource identifier to its content module
///
/// Futures are `!Send`; wasm hosts run them on the main-thread executor.
/// Implementations surface their own failures as
/// [`LoadError::Loader`]; the driver attributes them to the failing
/// identifier.
pub trait ResourceLoader {
    /// Fetch one resource and resolve it to its named-export mapping.
    fn load(&self, path: &str) -> LocalBoxFuture<'_, Result<Value>>;
}

/// Fetch every resource concurrently and merge the results.
///
/// Dispatch order is irrelevant; the merge always follows the declaration
/// order of `files`. The first failure settles the whole call.
pub async fn load_resources<L>(loader: &L, files: &[String]) -> Result<ModuleMap>
where
    L: ResourceLoader + ?Sized,
{
    let fetches = files.iter().map(|path| {
        let fetch = loader.load(path);
        async move {
            fetch.await.map_err(|err| match err {
                LoadError::Resource { .. } => err,
                LoadError::Loader { .. } => LoadError::resource(path.clone()),
            })
        }
    });

    let modules = try_join_all(fetches).await?;
    Ok(merge_modules(modules))
}

/// Run one load generation, applying state snapshots through `apply`.
///
/// The caller owns the visibility/emptiness gate: this runner assumes there
/// is something to load. `liveness` is checked before every application, so
/// a revoked generation settles silently without touching state.
pub async fn run_generation<L>(
    loader: &L,
    files: &[String],
    prior: LoadState,
    liveness: &Liveness,
    mut apply: impl FnMut(LoadState),
) where
    L: ResourceLoader + ?Sized,
{
    if !liveness.is_live() {
        return;
    }
    apply(LoadState::loading_from(&prior));

    let outcome = load_resources(loader, files).await;
    if !liveness.is_live() {
        return;
    }

    match outcome {
        Ok(data) => apply(LoadState::loaded(data)),
        Err(err) => apply(LoadState::failed(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::{pin_mut, poll};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::task::Poll;

    /// Loader serving fixed modules; unknown paths fail.
    struct StaticLoader(HashMap<String, Value>);

    impl StaticLoader {
        fn new(modules: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
            StaticLoader(
                modules
                    .into_iter()
                    .map(|(path, module)| (path.to_string(), module))
                    .collect(),
            )
        }
    }

    impl ResourceLoader for StaticLoader {
        fn load(&self, path: &str) -> LocalBoxFuture<'_, Result<Value>> {
            let result = self
                .0
                .get(path)
                .cloned()
                .ok_or_else(|| LoadError::loader(format!("unknown module: {path}")));
            Box::pin(async move { result })
        }
    }

    /// Loader whose fetches settle only when the test fires their gate.
    struct GatedLoader {
        gates: RefCell<HashMap<String, oneshot::Receiver<Result<Value>>>>,
    }

    impl GatedLoader {
        fn new(
            gates: impl IntoIterator<Item = (&'static str, oneshot::Receiver<Result<Value>>)>,
        ) -> Self {
            GatedLoader {
                gates: RefCell::new(
                    gates
                        .into_iter()
                        .map(|(path, rx)| (path.to_string(), rx))
                        .collect(),
                ),
            }
        }

        /// Gates not yet claimed by a dispatched fetch.
        fn pending_gates(&self) -> usize {
            self.gates.borrow().len()
        }
    }

    impl ResourceLoader for GatedLoader {
        fn load(&self, path: &str) -> LocalBoxFuture<'_, Result<Value>> {
            let gate = self.gates.borrow_mut().remove(path);
            let missing = format!("no gate for {path}");
            Box::pin(async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(LoadError::loader("gate dropped"))),
                    None => Err(LoadError::loader(missing)),
                }
            })
        }
    }

    fn files(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[tokio::test]
    async fn merges_resources_in_file_order() {
        let loader = StaticLoader::new([
            ("a", json!({ "posts": [1, 2], "tags": ["a"] })),
            ("b", json!({ "tags": ["b"], "authors": ["c"] })),
        ]);

        let merged = load_resources(&loader, &files(&["a", "b"]))
            .await
            .expect("both resources resolve");

        assert_eq!(
            merged.keys().map(String::as_str).collect::<Vec<_>>(),
            ["posts", "tags", "authors"]
        );
        assert_eq!(merged["tags"], json!(["b"]));
    }

    #[tokio::test]
    async fn any_failure_names_the_resource() {
        let loader = StaticLoader::new([("a", json!({ "posts": [1] }))]);

        let err = load_resources(&loader, &files(&["a", "missing.json"]))
            .await
            .expect_err("missing resource fails the generation");

        assert_eq!(err.to_string(), "Failed to load: missing.json");
    }

    #[tokio::test]
    async fn fetches_run_concurrently_and_settle_out_of_order() {
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        let loader = GatedLoader::new([("a", rx_a), ("b", rx_b)]);
        let file_list = files(&["a", "b"]);

        let load = load_resources(&loader, &file_list);
        pin_mut!(load);

        assert!(poll!(load.as_mut()).is_pending());
        // both fetches were dispatched before either resolved
        assert_eq!(loader.pending_gates(), 0);

        // resolve in reverse declaration order
        tx_b.send(Ok(json!({ "tags": ["b"] }))).unwrap();
        assert!(poll!(load.as_mut()).is_pending());
        tx_a.send(Ok(json!({ "posts": [1], "tags": ["a"] }))).unwrap();

        let merged = match poll!(load.as_mut()) {
            Poll::Ready(result) => result.expect("generation succeeds"),
            Poll::Pending => panic!("generation should settle"),
        };
        assert_eq!(
            merged.keys().map(String::as_str).collect::<Vec<_>>(),
            ["posts", "tags"]
        );
        assert_eq!(merged["tags"], json!(["b"]));
    }

    #[tokio::test]
    async fn generation_reports_loading_then_loaded() {
        let loader = StaticLoader::new([("a", json!({ "items": [1] }))]);
        let liveness = Liveness::new();
        let applied = RefCell::new(Vec::new());

        run_generation(&loader, &files(&["a"]), LoadState::idle(), &liveness, |s| {
            applied.borrow_mut().push(s)
        })
        .await;

        let states = applied.borrow();
        assert_eq!(states.len(), 2);
        assert!(states[0].loading);
        assert_eq!(states[0].error, None);
        assert_eq!(states[1].data.as_ref().map(|d| d.len()), Some(1));
        assert!(!states[1].loading);
    }

    #[tokio::test]
    async fn failing_generation_discards_the_other_resources_success() {
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        let loader = GatedLoader::new([("a", rx_a), ("b", rx_b)]);
        let file_list = files(&["a", "b"]);
        let liveness = Liveness::new();
        let applied = RefCell::new(Vec::new());

        {
            let run = run_generation(&loader, &file_list, LoadState::idle(), &liveness, |s| {
                applied.borrow_mut().push(s)
            });
            pin_mut!(run);

            assert!(poll!(run.as_mut()).is_pending());
            // the second resource succeeds before the first fails
            tx_b.send(Ok(json!({ "tags": ["b"] }))).unwrap();
            assert!(poll!(run.as_mut()).is_pending());
            tx_a.send(Err(LoadError::loader("boom"))).unwrap();
            assert!(poll!(run.as_mut()).is_ready());
        }

        let states = applied.borrow();
        let last = states.last().expect("generation settled");
        assert_eq!(last.data, None);
        assert_eq!(last.error.as_deref(), Some("Failed to load: a"));
        assert!(!last.loading);
    }

    #[tokio::test]
    async fn revoked_generation_never_touches_state() {
        let (tx_a, rx_a) = oneshot::channel();
        let loader = GatedLoader::new([("a", rx_a)]);
        let file_list = files(&["a"]);
        let liveness = Liveness::new();
        let applied = RefCell::new(Vec::new());

        {
            let run = run_generation(&loader, &file_list, LoadState::idle(), &liveness, |s| {
                applied.borrow_mut().push(s)
            });
            pin_mut!(run);

            assert!(poll!(run.as_mut()).is_pending());
            assert_eq!(applied.borrow().len(), 1);

            // teardown happens while the fetch is in flight
            liveness.revoke();
            tx_a.send(Ok(json!({ "items": [1] }))).unwrap();
            assert!(poll!(run.as_mut()).is_ready());
        }

        // the settled result was discarded, not applied
        assert_eq!(applied.borrow().len(), 1);
        assert!(applied.borrow()[0].loading);
    }

    #[tokio::test]
    async fn reload_generation_keeps_prior_data_while_loading() {
        let loader = StaticLoader::new([("b", json!({ "next": [2] }))]);
        let liveness = Liveness::new();
        let prior = LoadState::loaded(
            merge_modules([json!({ "previous": [1] })]),
        );
        let applied = RefCell::new(Vec::new());

        run_generation(&loader, &files(&["b"]), prior, &liveness, |s| {
            applied.borrow_mut().push(s)
        })
        .await;

        let states = applied.borrow();
        assert!(states[0].loading);
        assert!(states[0].data.as_ref().is_some_and(|d| d.contains_key("previous")));
        assert!(states[1].data.as_ref().is_some_and(|d| d.contains_key("next")));
    }
}
