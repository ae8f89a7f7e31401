//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_auth, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // If already logged in, go home
    if auth().is_logged_in() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let e = email().trim().to_string();
        let p = password();

        if e.is_empty() || p.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        match ui::auth_service().login(&e, &p) {
            Ok(session) => {
                auth.set(AuthState {
                    user: Some(session),
                });
                nav.push(Route::Home {});
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        main {
            class: "page auth-page",
            h1 { "Welcome Back" }
            p { class: "auth-subtitle", "Sign in to your cooking diary" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Sign in"
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
