//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::CurrentSession;

/// Authentication state for the application.
///
/// Storage is synchronous and local, so the state is simply the persisted
/// session (or its absence); there is no loading or connectivity tracking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<CurrentSession>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_logged_in)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Read the persisted session once on mount; views update the signal on
    // login/logout.
    let auth_state = use_signal(|| AuthState {
        user: crate::auth_service().current_user(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = String::new())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| match crate::auth_service().logout() {
        Ok(()) => auth_state.set(AuthState { user: None }),
        Err(e) => tracing::error!("Failed to log out: {e}"),
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
