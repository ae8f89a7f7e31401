use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

/// Top bar with the brand and auth-aware navigation.
#[component]
pub fn Header() -> Element {
    let auth = use_auth();

    rsx! {
        header {
            class: "header",
            Link { class: "brand", to: Route::Home {}, h1 { "Cooking Diary" } }
            nav {
                class: "header-nav",
                {match auth().user {
                    Some(user) => rsx! {
                        span { class: "header-greeting", "Hi, {user.username}" }
                        Link { class: "btn btn-primary", to: Route::AddRecipe {}, "Add Recipe" }
                        LogoutButton { class: "btn btn-outline", label: "Sign Out" }
                    },
                    None => rsx! {
                        Link { class: "btn btn-outline", to: Route::Login {}, "Sign In" }
                        Link { class: "btn btn-primary", to: Route::Register {}, "Create Account" }
                    },
                }}
            }
        }
    }
}
