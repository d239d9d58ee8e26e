//! Pre-transition navigation guard.
//!
//! DESIGN
//! ======
//! The decision is a pure function of three booleans so every combination can
//! be checked directly. [`NavigationGuard`] only gathers those inputs: route
//! metadata from the table and credential presence from the persistent slot.
//!
//! The guard reads storage at evaluation time and may race an in-flight
//! auth-failure stage. The invalidation redirect converges the result.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use super::navigator::Navigator;
use super::routes::{RouteTable, normalize_path};
use crate::config::AuthPaths;
use crate::state::storage::CredentialStorage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Abort the transition and go to this path instead.
    Redirect(String),
}

/// Rule order: protected-without-credential first, then auth-page-with-credential.
pub fn decide(
    requires_auth: bool,
    credential_present: bool,
    target_is_auth_page: bool,
    paths: &AuthPaths,
) -> GuardDecision {
    if requires_auth && !credential_present {
        GuardDecision::Redirect(paths.login.clone())
    } else if target_is_auth_page && credential_present {
        GuardDecision::Redirect(paths.home.clone())
    } else {
        GuardDecision::Allow
    }
}

/// Where to send the user after the credential was invalidated, or `None`
/// when they are already on the login or registration page.
pub fn invalidation_redirect<'a>(current_path: &str, paths: &'a AuthPaths) -> Option<&'a str> {
    if paths.is_auth_page(normalize_path(current_path)) {
        None
    } else {
        Some(paths.login.as_str())
    }
}

#[derive(Clone)]
pub struct NavigationGuard {
    storage: Arc<dyn CredentialStorage>,
    routes: RouteTable,
    paths: AuthPaths,
}

impl NavigationGuard {
    pub fn new(storage: Arc<dyn CredentialStorage>, routes: RouteTable, paths: AuthPaths) -> Self {
        Self { storage, routes, paths }
    }

    pub fn evaluate(&self, target: &str) -> GuardDecision {
        let path = normalize_path(target);
        decide(
            self.routes.requires_auth(path),
            self.storage.token().is_some(),
            self.paths.is_auth_page(path),
            &self.paths,
        )
    }

    /// Redirect to login after an invalidation unless already on an auth page.
    pub fn handle_invalidation(&self, navigator: &dyn Navigator) {
        let current = navigator.current_path();
        match invalidation_redirect(&current, &self.paths) {
            Some(target) => {
                log::info!("session invalidated at {current}, redirecting to {target}");
                navigator.push(target);
            }
            None => log::debug!("session invalidated on auth page {current}, no redirect"),
        }
    }
}
