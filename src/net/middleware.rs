//! Credential stages for the HTTP pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both stages read the persistent slot through the storage port, never the
//! session store, so the store can depend on the HTTP client without a cycle.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use std::sync::Arc;

use super::error::HttpError;
use super::http::{Middleware, RequestContext};
use crate::state::events::{AuthEvent, AuthEvents};
use crate::state::storage::CredentialStorage;

pub const AUTHORIZATION: &str = "Authorization";

/// Attaches `Authorization: Bearer <token>` when a credential is persisted.
pub struct BearerAuth {
    storage: Arc<dyn CredentialStorage>,
}

impl BearerAuth {
    pub fn new(storage: Arc<dyn CredentialStorage>) -> Self {
        Self { storage }
    }
}

impl Middleware for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer-auth"
    }

    fn on_request(&self, request: &mut RequestContext) {
        if let Some(token) = self.storage.token() {
            request.set_header(AUTHORIZATION, format!("Bearer {token}"));
        }
    }
}

/// Clears the persisted credential on authentication-rejected failures and
/// announces the invalidation on the event channel.
pub struct AuthFailure {
    storage: Arc<dyn CredentialStorage>,
    events: AuthEvents,
    rejected: Vec<u16>,
}

impl AuthFailure {
    pub fn new(storage: Arc<dyn CredentialStorage>, events: AuthEvents, rejected: Vec<u16>) -> Self {
        Self { storage, events, rejected }
    }
}

impl Middleware for AuthFailure {
    fn name(&self) -> &'static str {
        "auth-failure"
    }

    fn on_error(&self, request: &RequestContext, error: &HttpError) {
        let Some(status) = error.status().filter(|s| self.rejected.contains(s)) else {
            return;
        };
        log::warn!("credential rejected: path={} status={status}", request.path);
        self.storage.clear();
        self.events.emit(AuthEvent::Invalidated { status });
    }
}
