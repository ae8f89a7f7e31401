//! # Key-value store abstraction
//!
//! Every piece of persisted state in Cooking Diary lives under a small fixed set
//! of string keys, each holding one JSON document (see the key constants in
//! [`crate::auth`] and [`crate::recipes`]). [`KeyValueStore`] abstracts over where
//! those documents live, so the same auth and recipe logic works against browser
//! local storage ([`crate::LocalStorageStore`]), the filesystem
//! ([`crate::FileStore`]), or an in-memory map ([`crate::MemoryStore`]) in tests.
//!
//! All operations are synchronous: each one runs to completion within a single
//! user interaction, so there is no locking and no suspension point. A storage
//! fault surfaces as a [`StoreError`] value, never as a panic; callers decide
//! whether to report it or degrade (e.g. an unreadable session reads as "not
//! logged in").

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors produced at the store boundary.
///
/// Parse failures are reported as [`StoreError::Corrupt`] so callers can tell
/// "the backend failed" apart from "the stored document is damaged".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("`{key}` holds corrupted data: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Synchronous string-keyed storage with whole-value reads and writes.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// Boxed and borrowed stores behave like the store itself.
impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Read and deserialize the JSON document under `key`.
pub fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Serialize `value` to JSON and store it under `key`.
pub fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_read_json_missing_key() {
        let store = MemoryStore::new();
        let got: Option<Vec<String>> = read_json(&store, "nothing").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_read_json_corrupt_value() {
        let store = MemoryStore::new();
        store.set("broken", "{not json").unwrap();

        let err = read_json::<_, Vec<String>>(&store, "broken").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "broken"));
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemoryStore::new();
        write_json(&store, "list", &vec!["a".to_string(), "b".to_string()]).unwrap();

        let got: Option<Vec<String>> = read_json(&store, "list").unwrap();
        assert_eq!(got, Some(vec!["a".to_string(), "b".to_string()]));
    }
}
