//! REST API helpers for the task backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; non-2xx responses keep the status
//! and the server's `message` field so pages can pick user-facing text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginResponse, Task, TaskStatus, User};
#[cfg(feature = "csr")]
use super::types::{ErrorBody, LoginRequest, RegisterRequest, StatusUpdate, TaskListResponse};

/// Errors produced by REST calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed: status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is not available in this build (native / tests).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// User-facing text for a failed login attempt.
pub fn login_failed_message(err: &ApiError) -> &'static str {
    match err.status() {
        Some(400) => "Invalid email or password.",
        _ => "An error occurred. Please try again.",
    }
}

/// User-facing text for a failed registration attempt.
pub fn register_failed_message(err: &ApiError) -> String {
    err.server_message()
        .filter(|m| !m.trim().is_empty())
        .map_or_else(|| "An error occurred during registration".to_owned(), str::to_owned)
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP client bound to one API origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn task_endpoint(&self, task_id: &str) -> String {
        self.endpoint(&format!("/api/tasks/{task_id}"))
    }

    /// Fetch the profile for `token` from `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on network failure, non-2xx status, or a body
    /// that is not a user profile.
    pub async fn fetch_current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint("/api/auth/me"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint("/api/auth/me"), bearer(token));
            Err(ApiError::Unavailable)
        }
    }

    /// Exchange credentials for a token via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or credentials are rejected.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = LoginRequest { email, password };
            let resp = gloo_net::http::Request::post(&self.endpoint("/api/auth/login"))
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Create an account via `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server rejects it.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = RegisterRequest { username, email, password };
            let resp = gloo_net::http::Request::post(&self.endpoint("/api/auth/register"))
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// List the current user's tasks via `GET /api/tasks`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body has no task array.
    pub async fn fetch_tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint("/api/tasks"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let body: TaskListResponse = read_json(resp).await?;
            Ok(body.tasks)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    /// Change only the status of a task via `PUT /api/tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn set_task_status(&self, token: &str, task_id: &str, status: TaskStatus) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::put(&self.task_endpoint(task_id))
                .header("Authorization", &bearer(token))
                .json(&StatusUpdate { status })
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, self.task_endpoint(task_id), status);
            Err(ApiError::Unavailable)
        }
    }

    /// Delete a task via `DELETE /api/tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn delete_task(&self, token: &str, task_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&self.task_endpoint(task_id))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, self.task_endpoint(task_id));
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
    leptos::logging::warn!("API request to {} failed: {status}", resp.url());
    Err(ApiError::Status { status, message })
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
