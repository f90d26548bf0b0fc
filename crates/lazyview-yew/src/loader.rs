//! Content-module loader backends
//!
//! Two ways to resolve a resource identifier: fetch it over HTTP as a JSON
//! document, or hand it to a dynamic-import bridge provided by the host
//! page. Both resolve to the named-export mapping the core merge contract
//! consumes.

use lazyview_core::{LoadError, LocalBoxFuture, ResourceLoader, Result};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// JavaScript FFI functions
#[wasm_bindgen]
extern "C" {
    /// Import a content module; provided by the host page
    #[wasm_bindgen(js_name = loadContentModule, catch)]
    async fn load_content_module(path: &str) -> std::result::Result<JsValue, JsValue>;
}

/// Loads JSON content modules over HTTP
///
/// Identifiers are used as fetch URLs unchanged; the response body must be
/// a JSON object of named exports.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchLoader;

impl ResourceLoader for FetchLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'_, Result<Value>> {
        let url = path.to_string();
        Box::pin(async move {
            fetch_json(&url).await.map_err(|message| {
                log::warn!("content fetch failed for {url}: {message}");
                LoadError::loader(message)
            })
        })
    }
}

/// Fetch a URL and parse the body as JSON.
async fn fetch_json(url: &str) -> std::result::Result<Value, String> {
    let window = web_sys::window().ok_or("No window object")?;

    let request = web_sys::Request::new_with_str(url)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response object".to_string())?;

    if !resp.ok() {
        return Err(format!(
            "HTTP error: {} {}",
            resp.status(),
            resp.status_text()
        ));
    }

    let text_promise = resp
        .text()
        .map_err(|e| format!("Failed to get text: {:?}", e))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("Failed to read response: {:?}", e))?;
    let text = text_value
        .as_string()
        .ok_or_else(|| "Response is not a string".to_string())?;

    serde_json::from_str(&text).map_err(|e| format!("Invalid JSON: {}", e))
}

/// Loads content modules through the host page's dynamic-import bridge
#[derive(Clone, Copy, Debug, Default)]
pub struct ModuleLoader;

impl ResourceLoader for ModuleLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'_, Result<Value>> {
        let path = path.to_string();
        Box::pin(async move {
            let module = load_content_module(&path).await.map_err(|e| {
                log::warn!("module import failed for {path}: {:?}", e);
                LoadError::loader(format!("Import failed: {:?}", e))
            })?;
            module_to_value(&module).map_err(LoadError::loader)
        })
    }
}

/// Flatten a JS module namespace to a JSON value.
///
/// Round-trips through `JSON.stringify`, which drops function-valued
/// exports; the data exports that remain are what the merge contract
/// selects from.
fn module_to_value(module: &JsValue) -> std::result::Result<Value, String> {
    let json = js_sys::JSON::stringify(module)
        .map_err(|e| format!("Module is not serializable: {:?}", e))?;
    serde_json::from_str(&String::from(json)).map_err(|e| format!("Invalid module JSON: {}", e))
}
