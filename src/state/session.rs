//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionContext` is created at the application root and provided via
//! context. Route guards read it on every navigation; pages call `login`,
//! `logout`, and `set_current_user` on it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::User;
use crate::session::{SessionError, SessionManager};

/// Who is logged in, whether that is still being determined, and why the last
/// attempt failed.
///
/// Starts with `loading = true`; boot resolution or a `login` clears it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub loading: bool,
    pub error: Option<SessionError>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { current_user: None, loading: true, error: None }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Fold in the boot resolution outcome. Any failure is reported to the
    /// user as an expired session.
    pub fn apply_resolution(&mut self, outcome: Result<Option<User>, SessionError>) {
        match outcome {
            Ok(user) => self.current_user = user,
            Err(_) => {
                self.current_user = None;
                self.error = Some(SessionError::SessionExpired);
            }
        }
        self.loading = false;
    }

    pub fn apply_login(&mut self, outcome: Result<User, SessionError>) {
        match outcome {
            Ok(user) => {
                self.current_user = Some(user);
                self.error = None;
            }
            Err(e) => {
                self.current_user = None;
                self.error = Some(e);
            }
        }
        self.loading = false;
    }

    pub fn apply_logout(&mut self) {
        self.current_user = None;
    }

    pub fn set_current_user(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Handle to the single session instance: reactive state plus the manager
/// that performs storage and network work.
#[derive(Clone)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    manager: Arc<SessionManager>,
}

impl SessionContext {
    pub fn new(manager: SessionManager) -> Self {
        Self { state: RwSignal::new(SessionState::default()), manager: Arc::new(manager) }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Bearer token for collaborators calling the task API.
    pub fn bearer_token(&self) -> Option<String> {
        self.manager.token()
    }

    /// Boot resolution. Runs once from the application root.
    pub async fn resolve(&self) {
        let outcome = self.manager.resolve(unix_now()).await;
        match &outcome {
            Ok(Some(user)) => leptos::logging::log!("session: restored user {}", user.id),
            Ok(None) => {}
            Err(e) => leptos::logging::log!("session: not restored ({e:?})"),
        }
        self.state.update(|s| s.apply_resolution(outcome));
    }

    /// Adopt a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginFailed`] when the token cannot be confirmed;
    /// the state already reflects the failure.
    pub async fn login(&self, token: &str) -> Result<User, SessionError> {
        let outcome = self.manager.login(token).await;
        self.state.update(|s| s.apply_login(outcome.clone()));
        outcome
    }

    pub fn logout(&self) {
        self.manager.logout();
        self.state.update(SessionState::apply_logout);
        leptos::logging::log!("session: logged out");
    }

    pub fn set_current_user(&self, user: User) {
        self.state.update(|s| s.set_current_user(user));
    }

    pub fn dismiss_error(&self) {
        self.state.update(SessionState::dismiss_error);
    }
}

/// Current time in whole seconds since the Unix epoch.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
