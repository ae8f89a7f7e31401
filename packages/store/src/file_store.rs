//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as one file under a base directory. It is the
//! storage backend on native builds, keeping diary data across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── cookingDiaryUsers.json
//! ├── cookingDiaryCurrentUser.json
//! └── recipes.json
//! ```
//!
//! Use [`dirs::data_dir()`] (in the UI crate) to obtain a platform-appropriate
//! base, e.g. `~/.local/share/cooking-diary/` on Linux.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::kv::{KeyValueStore, StoreError};

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_err)?;
        std::fs::write(self.key_path(key), value).map_err(write_err)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthService;
    use crate::clock::ManualClock;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("cooking_diary_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        let auth = AuthService::with_clock(store, ManualClock::new(1_700_000_000_000));
        auth.register("julia", "julia@example.com", "bonappetit")
            .unwrap();

        // Re-open from the same directory: the account and session survive.
        let store2 = FileStore::new(dir.clone());
        let auth2 = AuthService::with_clock(store2, ManualClock::new(1_700_000_000_001));

        let session = auth2.current_user().unwrap();
        assert_eq!(session.email, "julia@example.com");
        assert!(auth2.is_logged_in());

        let relogin = auth2.login("julia@example.com", "bonappetit").unwrap();
        assert_eq!(relogin.username, "julia");

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
