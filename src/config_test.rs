use super::*;

#[test]
fn default_uses_same_origin_and_token_key() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, "");
    assert_eq!(cfg.token_storage_key, "token");
}

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://api.example.test//")), "https://api.example.test");
}

#[test]
fn normalize_base_url_trims_whitespace() {
    assert_eq!(normalize_base_url(Some("  http://localhost:5000/ ")), "http://localhost:5000");
}

#[test]
fn normalize_base_url_missing_is_empty() {
    assert_eq!(normalize_base_url(None), "");
    assert_eq!(normalize_base_url(Some("   ")), "");
}

#[test]
fn from_raw_keeps_default_storage_key() {
    let cfg = ClientConfig::from_raw(Some("https://tasks.example.test/"));
    assert_eq!(cfg.api_base_url, "https://tasks.example.test");
    assert_eq!(cfg.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
}
