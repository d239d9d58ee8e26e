//! Navigation port used for redirects that originate outside a route change.
//!
//! SYSTEM CONTEXT
//! ==============
//! The invalidation handler needs the current location and a way to push a new
//! one, but runs outside any component. `SignalNavigator` bridges that to the
//! router: the route guard effect records each location into `current`, and a
//! router-side effect drains `pending` into `use_navigate`.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use leptos::prelude::*;

pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    /// Fire-and-forget navigation; the outcome is not reported back.
    fn push(&self, path: &str);
}

#[derive(Clone, Copy, Debug)]
pub struct SignalNavigator {
    current: RwSignal<String>,
    pending: RwSignal<Option<String>>,
}

impl SignalNavigator {
    pub fn new(initial_path: &str) -> Self {
        Self { current: RwSignal::new(initial_path.to_owned()), pending: RwSignal::new(None) }
    }

    /// Record the router's current location.
    pub fn set_current(&self, path: &str) {
        self.current.set(path.to_owned());
    }

    /// Queued navigation target, tracked so effects rerun when a push lands.
    pub fn pending(&self) -> Option<String> {
        self.pending.get()
    }

    /// Take and clear the queued navigation target.
    pub fn take_pending(&self) -> Option<String> {
        let next = self.pending.get_untracked();
        if next.is_some() {
            self.pending.set(None);
        }
        next
    }
}

impl Navigator for SignalNavigator {
    fn current_path(&self) -> String {
        self.current.get_untracked()
    }

    fn push(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }
}

/// Initial location for the navigator before the router reports one.
pub fn browser_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}
