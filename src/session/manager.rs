//! Session lifecycle sequencing: boot resolution, login, logout.
//!
//! DESIGN
//! ======
//! The manager owns the token store and talks to the decoder and identity
//! endpoint, but holds no session state itself. Each operation returns an
//! outcome that `SessionState` folds in, so the whole lifecycle can be driven
//! without a reactive runtime.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::Arc;

use super::decoder::{JwtDecoder, TokenDecoder};
use super::error::SessionError;
use super::identity::{HttpIdentityClient, IdentityClient};
use super::token_store::{BrowserTokenStore, TokenStore};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::User;

pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    decoder: Arc<dyn TokenDecoder>,
    identity: Arc<dyn IdentityClient>,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn TokenStore>,
        decoder: Arc<dyn TokenDecoder>,
        identity: Arc<dyn IdentityClient>,
    ) -> Self {
        Self { store, decoder, identity }
    }

    /// Production wiring: `localStorage` token slot, JWT decoder, REST identity check.
    pub fn browser(config: &ClientConfig, api: ApiClient) -> Self {
        Self::new(
            Arc::new(BrowserTokenStore::new(config.token_storage_key.clone())),
            Arc::new(JwtDecoder),
            Arc::new(HttpIdentityClient::new(api)),
        )
    }

    /// Stored bearer token for authenticated API calls.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Boot-time resolution of the stored token.
    ///
    /// `Ok(None)` means no token was stored; no request is made. A token that
    /// fails to decode or has `exp <= now` yields [`SessionError::TokenInvalid`]
    /// without a request. A token the identity endpoint rejects yields
    /// [`SessionError::SessionExpired`]. Both failures purge the store.
    ///
    /// # Errors
    ///
    /// See above; every error leaves the token store empty.
    pub async fn resolve(&self, now: i64) -> Result<Option<User>, SessionError> {
        let Some(token) = self.store.get() else {
            leptos::logging::log!("session: no stored token");
            return Ok(None);
        };

        match self.decoder.decode(&token) {
            Ok(decoded) if !decoded.is_expired_at(now) => {}
            Ok(_) => {
                leptos::logging::log!("session: stored token expired");
                self.store.clear();
                return Err(SessionError::TokenInvalid);
            }
            Err(e) => {
                leptos::logging::warn!("session: stored token unreadable: {e}");
                self.store.clear();
                return Err(SessionError::TokenInvalid);
            }
        }

        match self.identity.current_user(&token).await {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                leptos::logging::warn!("session: identity check failed: {e}");
                self.store.clear();
                Err(SessionError::SessionExpired)
            }
        }
    }

    /// Persist `token` and confirm it with the identity endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginFailed`] and clears the store when the
    /// identity request fails.
    pub async fn login(&self, token: &str) -> Result<User, SessionError> {
        self.store.set(token);
        match self.identity.current_user(token).await {
            Ok(user) => Ok(user),
            Err(e) => {
                leptos::logging::warn!("session: login confirmation failed: {e}");
                self.store.clear();
                Err(SessionError::LoginFailed)
            }
        }
    }

    /// Drop the stored token. No network call.
    pub fn logout(&self) {
        self.store.clear();
    }
}
