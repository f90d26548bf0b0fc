// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Content-module shape adapters
//!
//! Loaded resources arrive as free-form named-export mappings. These
//! adapters pin the shape-handling down to an explicit contract: unwrap a
//! conventional `default` export, keep the array-valued entries (falling
//! back to the whole mapping when none qualify), and merge per-resource
//! selections in declaration order with later resources winning collisions.

use serde_json::Value;

/// Named-export mapping with insertion order preserved
pub type ModuleMap = serde_json::Map<String, Value>;

/// Unwrap a conventional `default` export.
///
/// A non-null `default` entry replaces the module mapping; a null or absent
/// one leaves the mapping untouched. Non-object content passes through
/// unchanged.
pub fn unwrap_default(module: Value) -> Value {
    match module {
        Value::Object(mut map) => {
            if map.get("default").is_some_and(|v| !v.is_null()) {
                map.remove("default").unwrap_or(Value::Null)
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

/// Select the array-valued entries of a content mapping.
///
/// When no entry holds an array the whole mapping is used unchanged, so
/// resources exporting plain objects still contribute. Non-object content
/// has no named entries to select and yields an empty mapping.
pub fn select_arrays(content: Value) -> ModuleMap {
    match content {
        Value::Object(map) => {
            if map.values().any(Value::is_array) {
                map.into_iter().filter(|(_, v)| v.is_array()).collect()
            } else {
                map
            }
        }
        _ => ModuleMap::new(),
    }
}

/// Merge loaded modules into one mapping.
///
/// Modules are folded in declaration order; a later module's keys overwrite
/// an earlier module's on collision, keeping the first occurrence's position.
pub fn merge_modules(modules: impl IntoIterator<Item = Value>) -> ModuleMap {
    let mut merged = ModuleMap::new();
    for module in modules {
        for (key, value) in select_arrays(unwrap_default(module)) {
            merged.insert(key, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(map: &ModuleMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn unwrap_default_takes_the_default_export() {
        let module = json!({ "default": { "items": [1, 2] }, "helper": 3 });
        assert_eq!(unwrap_default(module), json!({ "items": [1, 2] }));
    }

    #[test]
    fn unwrap_default_keeps_modules_without_one() {
        let module = json!({ "items": [1], "labels": ["a"] });
        assert_eq!(unwrap_default(module.clone()), module);
    }

    #[test]
    fn unwrap_default_treats_null_as_absent() {
        let module = json!({ "default": null, "items": [1] });
        assert_eq!(unwrap_default(module), json!({ "default": null, "items": [1] }));
    }

    #[test]
    fn select_arrays_keeps_only_array_entries() {
        let selected = select_arrays(json!({ "items": [1], "count": 2, "labels": ["a"] }));
        assert_eq!(keys(&selected), ["items", "labels"]);
    }

    #[test]
    fn select_arrays_falls_back_to_the_whole_mapping() {
        let content = json!({ "title": "home", "count": 2 });
        let selected = select_arrays(content.clone());
        assert_eq!(Value::Object(selected), content);
    }

    #[test]
    fn select_arrays_yields_nothing_for_non_objects() {
        assert!(select_arrays(json!([1, 2, 3])).is_empty());
        assert!(select_arrays(json!("plain text")).is_empty());
    }

    #[test]
    fn merge_unions_array_keys_with_later_modules_winning() {
        let merged = merge_modules([
            json!({ "posts": [1, 2], "tags": ["a"] }),
            json!({ "tags": ["b"], "authors": ["c"] }),
        ]);
        assert_eq!(keys(&merged), ["posts", "tags", "authors"]);
        assert_eq!(merged["tags"], json!(["b"]));
        assert_eq!(merged["posts"], json!([1, 2]));
    }

    #[test]
    fn merge_shallow_merges_modules_without_arrays() {
        let merged = merge_modules([
            json!({ "title": "first", "count": 1 }),
            json!({ "title": "second", "author": "b" }),
        ]);
        assert_eq!(keys(&merged), ["title", "count", "author"]);
        assert_eq!(merged["title"], json!("second"));
    }

    #[test]
    fn merge_handles_mixed_shapes_and_default_exports() {
        let merged = merge_modules([
            json!({ "default": { "items": [1], "count": 7 } }),
            json!({ "meta": { "page": 1 } }),
        ]);
        // first module filters to its arrays, second falls back whole
        assert_eq!(keys(&merged), ["items", "meta"]);
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        assert!(merge_modules([]).is_empty());
    }
}
