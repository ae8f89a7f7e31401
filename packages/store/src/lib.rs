pub mod auth;
pub mod clock;
pub mod kv;
pub mod media;
pub mod models;
pub mod recipes;
pub mod seed;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use auth::{AuthError, AuthService};
pub use clock::{Clock, ManualClock, WallClock};
pub use kv::{KeyValueStore, StoreError};
pub use media::data_url;
pub use models::{CurrentSession, MediaType, Recipe, RecipeDraft, TagInput, User};
pub use recipes::{filter_recipes, RecipeBook};
pub use seed::popular_recipes;
pub use validate::{validate_registration, ValidationError};
