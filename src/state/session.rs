//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The store is the only writer of
//! the reactive slot and writes the persistent slot in the same call, with no
//! await point in between.
//!
//! ERROR HANDLING
//! ==============
//! Public actions never panic or propagate raw transport errors: login and
//! registration return [`SessionError`] with a displayable message, and
//! `check_auth` resolves every outcome into state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::events::AuthEvent;
use super::storage::CredentialStorage;
use crate::net::api;
use crate::net::error::HttpError;
use crate::net::http::HttpClient;
use crate::net::types::{AuthResponse, User};

pub const DEFAULT_LOGIN_ERROR: &str = "Login failed";
pub const DEFAULT_REGISTER_ERROR: &str = "Registration failed";

/// Reactive session slot: credential, profile and identity-check status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True while `check_auth` waits on `/auth/me`.
    pub loading: bool,
}

/// Failed login or registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SessionError {
    pub message: String,
    pub status: Option<u16>,
}

impl SessionError {
    fn from_http(err: &HttpError, default_message: &str) -> Self {
        Self {
            message: err.server_message().unwrap_or(default_message).to_owned(),
            status: err.status(),
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    storage: Arc<dyn CredentialStorage>,
    http: HttpClient,
    rejected: Vec<u16>,
}

impl SessionStore {
    /// Create the store with the reactive token seeded from storage.
    pub fn new(storage: Arc<dyn CredentialStorage>, http: HttpClient, rejected: Vec<u16>) -> Self {
        let state = RwSignal::new(SessionState { token: storage.token(), ..SessionState::default() });
        Self { state, storage, http, rejected }
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state without subscribing the caller.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.token.is_some()))
    }

    pub fn current_user(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user.clone()))
    }

    /// Write the credential to both slots. Empty tokens count as absent, and
    /// clearing the credential also drops the profile.
    pub fn set_token(&self, token: Option<&str>) {
        let token = token.filter(|t| !t.is_empty()).map(str::to_owned);
        self.persist(token.as_deref());
        self.state.update(|s| {
            if token.is_none() {
                s.user = None;
            }
            s.token = token;
        });
    }

    /// Replace the profile. Ignored while no credential is held.
    pub fn set_user(&self, user: Option<User>) {
        self.state.update(|s| s.user = if s.token.is_some() { user } else { None });
    }

    /// Authenticate against `/auth/login` and establish the session.
    ///
    /// # Errors
    ///
    /// Returns the server's `error` message, or [`DEFAULT_LOGIN_ERROR`].
    pub async fn login(&self, username: &str, password: &str) -> Result<(), SessionError> {
        match api::login(&self.http, username, password).await {
            Ok(resp) => {
                self.establish(resp);
                Ok(())
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                Err(SessionError::from_http(&err, DEFAULT_LOGIN_ERROR))
            }
        }
    }

    /// Create an account via `/auth/register` and log straight in.
    ///
    /// # Errors
    ///
    /// Returns the server's `error` message, or [`DEFAULT_REGISTER_ERROR`].
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), SessionError> {
        match api::register(&self.http, username, email, password).await {
            Ok(resp) => {
                self.establish(resp);
                Ok(())
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                Err(SessionError::from_http(&err, DEFAULT_REGISTER_ERROR))
            }
        }
    }

    /// Reconcile the reactive slot with storage, then refresh the profile.
    ///
    /// Skips the network entirely when no credential is present. Only an
    /// authentication-rejected response ends the session; other failures keep
    /// it and are logged.
    pub async fn check_auth(&self) {
        let persisted = self.storage.token();
        if self.state.with_untracked(|s| s.token != persisted) {
            log::debug!("resyncing session token from storage");
            self.state.update(|s| {
                if persisted.is_none() {
                    s.user = None;
                }
                s.token = persisted;
            });
        }

        if self.state.with_untracked(|s| s.token.is_none()) {
            return;
        }

        self.state.update(|s| s.loading = true);
        match api::fetch_current_user(&self.http).await {
            Ok(user) => self.state.update(|s| {
                // A logout during the identity call wins over the late profile.
                if s.token.is_some() {
                    s.user = Some(user);
                }
                s.loading = false;
            }),
            Err(err) if err.is_auth_rejected(&self.rejected) => {
                log::info!("stored credential rejected, ending session");
                self.clear_session();
                self.state.update(|s| s.loading = false);
            }
            Err(err) => {
                log::warn!("identity check failed: {err}");
                self.state.update(|s| s.loading = false);
            }
        }
    }

    /// Clear credential and profile. No network call; safe to repeat.
    pub fn logout(&self) {
        log::info!("logging out");
        self.clear_session();
    }

    /// Subscriber for the auth event channel.
    pub fn handle_event(&self, event: &AuthEvent) {
        match event {
            AuthEvent::Invalidated { status } => {
                log::debug!("session invalidated by status {status}");
                self.clear_session();
            }
        }
    }

    fn establish(&self, resp: AuthResponse) {
        log::info!("session established for user {}", resp.user.id);
        self.write_session(Some(resp.token), Some(resp.user));
    }

    fn clear_session(&self) {
        self.write_session(None, None);
    }

    fn write_session(&self, token: Option<String>, user: Option<User>) {
        let token = token.filter(|t| !t.is_empty());
        let user = user.filter(|_| token.is_some());
        self.persist(token.as_deref());
        self.state.update(|s| {
            s.token = token;
            s.user = user;
        });
    }

    fn persist(&self, token: Option<&str>) {
        match token {
            Some(t) => self.storage.set(t),
            None => self.storage.clear(),
        }
    }
}
