//! Browser Glue
//!
//! localStorage, History API, file reading and blob downloads.

use js_sys::{Array, Uint8Array};
use leptos::prelude::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Storage, Url};

use crate::api::{ApiError, Result};

fn js_err(context: &str, err: JsValue) -> ApiError {
    ApiError::Browser(format!("{}: {:?}", context, err))
}

// ========================
// Token storage
// ========================

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

pub fn load_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten().filter(|v| !v.is_empty())
}

pub fn store_item(key: &str, value: &str) -> Result<()> {
    let storage = local_storage().ok_or_else(|| ApiError::Browser("localStorage unavailable".into()))?;
    storage.set_item(key, value).map_err(|e| js_err("localStorage.setItem", e))
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// ========================
// History
// ========================

/// Current `(pathname, search)`
pub fn current_location() -> (String, String) {
    let location = window().location();
    (
        location.pathname().unwrap_or_else(|_| "/".to_string()),
        location.search().unwrap_or_default(),
    )
}

pub fn push_path(path: &str) {
    if let Ok(history) = window().history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::error!("[ROUTER] pushState {} failed: {:?}", path, e);
        }
    }
}

pub fn replace_path(path: &str) {
    if let Ok(history) = window().history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::error!("[ROUTER] replaceState {} failed: {:?}", path, e);
        }
    }
}

// ========================
// Files
// ========================

/// Whole file contents, copied into wasm memory.
///
/// Holds a second full copy of the file while the request body is built, so
/// callers bound the size first (see `config::MAX_UPLOAD_BYTES`).
pub async fn read_file_bytes(file: &File) -> Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| js_err("File.arrayBuffer", e))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Offer bytes to the user as a file download
pub fn download_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<()> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| js_err("new Blob", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_err("URL.createObjectURL", e))?;

    let result = click_download_link(&url, file_name);
    let _ = Url::revoke_object_url(&url);
    result
}

fn click_download_link(url: &str, file_name: &str) -> Result<()> {
    let document = window().document().ok_or_else(|| ApiError::Browser("no document".into()))?;
    let body = document.body().ok_or_else(|| ApiError::Browser("no body".into()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_err("createElement", e))?
        .dyn_into()
        .map_err(|_| ApiError::Browser("anchor cast failed".into()))?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(|e| js_err("appendChild", e))?;
    anchor.click();
    anchor.remove();
    Ok(())
}
