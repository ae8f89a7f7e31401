//! # Browser local storage backend
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. It persists the diary's keys through `window.localStorage`
//! via `web-sys`, which is what keeps accounts, the current session, and
//! submitted recipes across page reloads.
//!
//! Unlike a network-backed store there is nothing to configure: the struct is
//! zero-size and grabs the `Storage` handle on every operation (the browser
//! caches it internally). Storage being disabled or full surfaces as a
//! [`StoreError`] so callers can report it; it never propagates as an uncaught
//! JS exception.

use wasm_bindgen::JsValue;

use crate::kv::{KeyValueStore, StoreError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "no window".to_string())?
            .local_storage()
            .map_err(|e| js_reason(&e))?
            .ok_or_else(|| "local storage is disabled".to_string())
    }
}

fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let read_err = |reason: String| StoreError::Read {
            key: key.to_string(),
            reason,
        };
        let storage = Self::storage().map_err(read_err)?;
        storage
            .get_item(key)
            .map_err(|e| read_err(js_reason(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |reason: String| StoreError::Write {
            key: key.to_string(),
            reason,
        };
        let storage = Self::storage().map_err(write_err)?;
        // Fails with a QuotaExceededError when the origin's storage is full.
        storage
            .set_item(key, value)
            .map_err(|e| write_err(js_reason(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let write_err = |reason: String| StoreError::Write {
            key: key.to_string(),
            reason,
        };
        let storage = Self::storage().map_err(write_err)?;
        storage
            .remove_item(key)
            .map_err(|e| write_err(js_reason(&e)))
    }
}
