//! Identity confirmation against `/api/auth/me`.

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::User;

/// Resolves a bearer token to the user it belongs to. Enables stubbing in tests.
///
/// Futures are `?Send`: browser HTTP futures are bound to the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait IdentityClient: Send + Sync {
    /// # Errors
    ///
    /// Any network failure or non-2xx response; callers treat all of them as
    /// session invalidation.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

/// [`IdentityClient`] backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct HttpIdentityClient {
    api: ApiClient,
}

impl HttpIdentityClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityClient for HttpIdentityClient {
    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.api.fetch_current_user(token).await
    }
}
