//! Token payload decoding.
//!
//! The client only needs the expiry claim to avoid a pointless identity call
//! with a stale token. Signatures are verified by the server on every request,
//! so [`JwtDecoder`] reads the payload segment without checking them.

#[cfg(test)]
#[path = "decoder_test.rs"]
mod decoder_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Claims extracted from a token.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedToken {
    /// `exp` claim in seconds since the Unix epoch. `None` when the token has
    /// no expiry.
    pub expires_at: Option<i64>,
    /// Full payload object.
    pub claims: serde_json::Value,
}

impl DecodedToken {
    /// A token is expired once `now` reaches its `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token is not in header.payload.signature form")]
    Malformed,
    #[error("payload is not valid base64url: {0}")]
    Base64(String),
    #[error("payload is not a JSON object: {0}")]
    Json(String),
    #[error("exp claim is not a number")]
    InvalidExpiry,
}

/// Reads expiry and claims from an opaque token.
pub trait TokenDecoder: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the token cannot be parsed.
    fn decode(&self, token: &str) -> Result<DecodedToken, DecodeError>;
}

/// Decoder for JWT compact serialization.
#[derive(Clone, Copy, Debug, Default)]
pub struct JwtDecoder;

impl TokenDecoder for JwtDecoder {
    fn decode(&self, token: &str) -> Result<DecodedToken, DecodeError> {
        let mut parts = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DecodeError::Malformed);
        };
        if payload.is_empty() {
            return Err(DecodeError::Malformed);
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| DecodeError::Base64(e.to_string()))?;
        let claims: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))?;
        if !claims.is_object() {
            return Err(DecodeError::Json("payload is not an object".to_owned()));
        }

        let expires_at = match claims.get("exp") {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Number(n)) => Some(expiry_seconds(n)?),
            Some(_) => return Err(DecodeError::InvalidExpiry),
        };

        Ok(DecodedToken { expires_at, claims })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn expiry_seconds(n: &serde_json::Number) -> Result<i64, DecodeError> {
    if let Some(int) = n.as_i64() {
        return Ok(int);
    }
    match n.as_f64() {
        Some(float) if float.is_finite() => Ok(float.floor() as i64),
        _ => Err(DecodeError::InvalidExpiry),
    }
}
