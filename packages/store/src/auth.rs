//! # Authentication and session management
//!
//! [`AuthService`] owns the two persisted collections behind the login flow:
//!
//! - the **account table** (`cookingDiaryUsers`): every registered [`User`],
//!   keyed by unique email;
//! - the **current session** (`cookingDiaryCurrentUser`): at most one
//!   [`CurrentSession`] projection of a user, present iff someone is logged in.
//!
//! All reads and writes go through the [`KeyValueStore`] trait, so the same
//! logic works against browser local storage, the filesystem, or an in-memory
//! fake in tests. Ids and `createdAt` timestamps come from the injected
//! [`Clock`].
//!
//! ## Failure semantics
//!
//! No operation panics or throws past its own boundary. Domain failures
//! (duplicate email, bad credentials) and storage faults both come back as
//! [`AuthError`] values ready to render. `login` deliberately returns the same
//! message for "no such email" and "wrong password" so the form cannot be used
//! to enumerate accounts. `current_user` swallows faults entirely: an
//! unreadable or corrupted session reads as "not logged in".

use crate::clock::{iso8601, Clock, WallClock};
use crate::kv::{read_json, write_json, KeyValueStore, StoreError};
use crate::models::{CurrentSession, User};

/// Storage key of the account table.
pub const USERS_KEY: &str = "cookingDiaryUsers";
/// Storage key of the current-session record.
pub const CURRENT_USER_KEY: &str = "cookingDiaryCurrentUser";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("A user with this email already exists. Please use a different email or login.")]
    EmailTaken,
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Registration, login, and session state over a [`KeyValueStore`].
pub struct AuthService<S, C = WallClock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: WallClock,
        }
    }
}

impl<S: KeyValueStore, C: Clock> AuthService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Register a new account and log it in immediately.
    ///
    /// Fails with [`AuthError::EmailTaken`] when the email already exists
    /// (case-sensitive exact match); on any failure neither store is mutated.
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<CurrentSession, AuthError> {
        let mut users = self.read_users()?;

        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let now = self.clock.now_millis();
        let user = User {
            id: now,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: iso8601(now),
        };
        let session = user.to_session();

        users.push(user);
        write_json(&self.store, USERS_KEY, &users)?;
        write_json(&self.store, CURRENT_USER_KEY, &session)?;

        Ok(session)
    }

    /// Log in with an exact email and password match.
    ///
    /// Any miss, whether the email is unknown or the password is wrong,
    /// returns the identical [`AuthError::InvalidCredentials`] message.
    pub fn login(&self, email: &str, password: &str) -> Result<CurrentSession, AuthError> {
        let users = self.read_users()?;

        let user = users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = user.to_session();
        write_json(&self.store, CURRENT_USER_KEY, &session)?;

        Ok(session)
    }

    /// The logged-in user's session, or `None` when absent or unreadable.
    pub fn current_user(&self) -> Option<CurrentSession> {
        read_json(&self.store, CURRENT_USER_KEY).ok().flatten()
    }

    /// Remove the current session.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(CURRENT_USER_KEY)?;
        Ok(())
    }

    /// Whether a session exists and is marked logged in.
    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some_and(|s| s.is_logged_in)
    }

    fn read_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(read_json(&self.store, USERS_KEY)?.unwrap_or_default())
    }
}
