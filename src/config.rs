//! Client configuration resolved at build time.
//!
//! The browser bundle has no process environment at runtime, so values are
//! captured with `option_env!` when the WASM artifact is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the bearer token.
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash. Empty means same-origin requests.
    pub api_base_url: String,
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: String::new(), token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `TASKBOARD_API_URL`: API origin, default same-origin
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("TASKBOARD_API_URL"))
    }

    fn from_raw(api_url: Option<&str>) -> Self {
        Self { api_base_url: normalize_base_url(api_url), ..Self::default() }
    }
}

/// Trim whitespace and trailing slashes so endpoint paths can be appended verbatim.
pub fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}
