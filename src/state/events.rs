//! Auth event channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth-failure stage publishes [`AuthEvent::Invalidated`] after clearing
//! the persistent credential. The session store and the navigation guard
//! subscribe independently, so the HTTP layer never calls into either.
//!
//! Delivery is synchronous and in subscription order. Handlers run outside
//! the subscriber lock, so a handler may subscribe or emit again.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// A call failed with an authentication-rejected status and the persisted
    /// credential has been cleared.
    Invalidated { status: u16 },
}

type Handler = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

/// Cloneable handle to one shared subscriber list.
#[derive(Clone, Default)]
pub struct AuthEvents {
    handlers: Arc<Mutex<Vec<Handler>>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner).push(Arc::new(handler));
    }

    pub fn emit(&self, event: AuthEvent) {
        let handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
