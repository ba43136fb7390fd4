//! Browser Storage
//!
//! `window.localStorage` as a [`KeyValueStore`] for the session manager.

use taskboard_core::{ClientError, ClientResult, KeyValueStore};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(err: JsValue) -> ClientError {
    ClientError::Storage(format!("{:?}", err))
}

fn local_storage() -> ClientResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| ClientError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}
