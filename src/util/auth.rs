//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos has no pre-transition hook, so the guard runs as an effect keyed on
//! the router location and the session's authenticated flag. Redirects use
//! `replace` so the blocked route does not stay in history.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::nav::guard::{GuardDecision, NavigationGuard};
use crate::nav::navigator::SignalNavigator;
use crate::nav::routes::normalize_path;

/// Redirect target for `path`, or `None` when the transition is allowed.
pub fn guard_redirect(guard: &NavigationGuard, path: &str) -> Option<String> {
    match guard.evaluate(path) {
        GuardDecision::Redirect(target) if target != normalize_path(path) => Some(target),
        _ => None,
    }
}

/// Evaluate the guard whenever the location or authentication changes.
pub fn install_route_guard<F>(
    guard: NavigationGuard,
    navigator: SignalNavigator,
    pathname: Memo<String>,
    authenticated: Signal<bool>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        let _ = authenticated.get();
        navigator.set_current(&path);
        if let Some(target) = guard_redirect(&guard, &path) {
            log::debug!("guard redirect: {path} -> {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Forward navigator pushes (from auth invalidation) to the router.
pub fn install_redirect_listener<F>(navigator: SignalNavigator, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if navigator.pending().is_none() {
            return;
        }
        if let Some(target) = navigator.take_pending() {
            navigate(&target, NavigateOptions::default());
        }
    });
}
