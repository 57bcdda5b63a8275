//! Bearer token persistence.
//!
//! A single key-value slot; nothing here validates the token.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Mutex, PoisonError};

/// Storage for the one bearer token the client holds.
pub trait TokenStore: Send + Sync {
    /// Persist `token`, overwriting any previous value.
    fn set(&self, token: &str);
    /// Current value, unvalidated.
    fn get(&self) -> Option<String>;
    /// Remove the stored value.
    fn clear(&self);
}

/// In-process store used by tests and native builds.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// `localStorage`-backed store. Outside the browser it behaves as an empty,
/// write-discarding slot.
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Logs a failed `localStorage` write. Returns whether the write went through.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn note_storage_result<E: std::fmt::Debug>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            leptos::logging::warn!("localStorage: failed to {action} {key}: {err:?}");
            false
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; token not persisted");
                return;
            };
            note_storage_result("persist", &self.key, storage.set_item(&self.key, token));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                note_storage_result("clear", &self.key, storage.remove_item(&self.key));
            }
        }
    }
}
