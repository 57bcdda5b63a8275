//! Session failure kinds surfaced to the UI.

/// Why the session ended up without a current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The stored token was malformed or already expired.
    #[error("Session expired or invalid token")]
    TokenInvalid,

    /// The identity endpoint rejected a token that looked valid locally.
    #[error("Session expired or invalid token")]
    SessionExpired,

    /// `login` could not confirm the freshly issued token.
    #[error("Login failed. Please try again.")]
    LoginFailed,
}
