//! Registration page view with username/email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_auth, AuthState};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // If already logged in, go home
    if auth().is_logged_in() {
        nav.replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let u = username().trim().to_string();
        let e = email().trim().to_string();
        let p = password();

        if let Err(invalid) = store::validate_registration(&u, &e, &p) {
            error.set(Some(invalid.to_string()));
            return;
        }
        if p != confirm_password() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        match ui::auth_service().register(&u, &e, &p) {
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
            h1 { "Create Account" }
            p { class: "auth-subtitle", "Start your own cooking diary" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Sign up"
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
