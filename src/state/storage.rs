//! Persistent credential slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store, the bearer-auth stage, the auth-failure stage and the
//! navigation guard all read or write the token through [`CredentialStorage`].
//! No component touches `localStorage` directly. Readers go through
//! [`CredentialStorage::token`] so they agree on what "present" means.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: a missing window or a storage exception
//! reads as "no credential" and writes are dropped. SSR paths are no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Mutex, PoisonError};

/// Get/set/clear access to the persisted bearer token.
pub trait CredentialStorage: Send + Sync {
    /// Raw stored value, including an empty string.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    /// The credential, if one is present. An empty stored value is absent.
    fn token(&self) -> Option<String> {
        self.get().filter(|t| !t.is_empty())
    }
}

/// In-memory slot used in tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl CredentialStorage for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// `window.localStorage` slot under a single key.
///
/// The storage handle is looked up on every access so the value itself stays
/// `Send + Sync` and can live in Leptos context.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(feature = "hydrate")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl CredentialStorage for BrowserStorage {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::local_storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("failed to persist credential under key {}", self.key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}
