//! Session context: the one place components are constructed and wired.
//!
//! ARCHITECTURE
//! ============
//! ```text
//!   CredentialStorage ◄──── SessionStore ───► HttpClient [BearerAuth, AuthFailure] ──► Transport
//!          ▲                     ▲                                  │
//!          │                     └──────── AuthEvents ◄─────────────┘
//!   NavigationGuard ◄────────────────────────┘  (Invalidated → redirect via Navigator)
//! ```
//! The HTTP pipeline never calls the store or the router. It clears storage and
//! emits on `AuthEvents`; the store and the guard subscribe in that order.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::nav::guard::NavigationGuard;
use crate::nav::navigator::Navigator;
use crate::nav::routes::RouteTable;
use crate::net::http::{HttpClient, Transport};
use crate::net::middleware::{AuthFailure, BearerAuth};
use crate::state::events::AuthEvents;
use crate::state::session::SessionStore;
use crate::state::storage::CredentialStorage;

/// Shared handle provided through Leptos context.
#[derive(Clone)]
pub struct AuthContext {
    pub config: ClientConfig,
    pub storage: Arc<dyn CredentialStorage>,
    pub events: AuthEvents,
    pub http: HttpClient,
    pub session: SessionStore,
    pub guard: NavigationGuard,
}

impl AuthContext {
    pub fn new(
        config: ClientConfig,
        storage: Arc<dyn CredentialStorage>,
        transport: Arc<dyn Transport>,
        routes: RouteTable,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let events = AuthEvents::new();
        let http = HttpClient::new(transport)
            .with_stage(Arc::new(BearerAuth::new(storage.clone())))
            .with_stage(Arc::new(AuthFailure::new(
                storage.clone(),
                events.clone(),
                config.auth_rejected_statuses.clone(),
            )));
        let session = SessionStore::new(storage.clone(), http.clone(), config.auth_rejected_statuses.clone());
        let guard = NavigationGuard::new(storage.clone(), routes, config.paths.clone());

        let session_sub = session.clone();
        events.subscribe(move |event| session_sub.handle_event(event));
        let guard_sub = guard.clone();
        events.subscribe(move |_| guard_sub.handle_invalidation(navigator.as_ref()));

        log::debug!("auth context ready: stages={:?}", http.stage_names());
        Self { config, storage, events, http, session, guard }
    }
}
