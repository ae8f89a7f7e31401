//! Shared storage constructors for all platforms.
//!
//! Returns services backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser local storage via
//!   [`store::LocalStorageStore`]
//! - **Native**: filesystem via [`store::FileStore`] under the platform data
//!   directory (e.g. `~/.local/share/cooking-diary/` on Linux)

use store::{AuthService, RecipeBook};

fn make_store() -> impl store::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("cooking-diary");
        store::FileStore::new(base)
    }
}

/// Auth service over the platform-appropriate store.
pub fn auth_service() -> AuthService<impl store::KeyValueStore> {
    AuthService::new(make_store())
}

/// Recipe book over the platform-appropriate store.
pub fn recipe_book() -> RecipeBook<impl store::KeyValueStore> {
    RecipeBook::new(make_store())
}
