//! Client-side session lifecycle.
//!
//! ARCHITECTURE
//! ============
//! `token_store` persists the bearer token, `decoder` reads its expiry,
//! `identity` confirms it against the server, and `manager` sequences the three
//! for boot resolution, login, and logout. Reactive state lives in
//! `crate::state::session`; navigation decisions in `crate::util::route_guard`.

pub mod decoder;
pub mod error;
pub mod identity;
pub mod manager;
pub mod token_store;

pub use decoder::{DecodeError, DecodedToken, JwtDecoder, TokenDecoder};
pub use error::SessionError;
pub use identity::{HttpIdentityClient, IdentityClient};
pub use manager::SessionManager;
pub use token_store::{BrowserTokenStore, MemoryTokenStore, TokenStore};
