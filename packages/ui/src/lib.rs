//! This crate contains all shared UI for the workspace.

pub mod components;

mod backend;
pub use backend::{auth_service, recipe_book};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod hero;
pub use hero::Hero;

mod footer;
pub use footer::Footer;

mod recipe_card;
pub use recipe_card::RecipeCard;
