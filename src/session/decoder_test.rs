use super::*;
use serde_json::json;

fn jwt_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

// =============================================================
// JwtDecoder
// =============================================================

#[test]
fn decode_reads_exp_and_claims() {
    let token = jwt_with_payload(&json!({ "id": "u1", "exp": 1_900_000_000 }));
    let decoded = JwtDecoder.decode(&token).unwrap();
    assert_eq!(decoded.expires_at, Some(1_900_000_000));
    assert_eq!(decoded.claims["id"], "u1");
}

#[test]
fn decode_without_exp_has_no_expiry() {
    let token = jwt_with_payload(&json!({ "id": "u1" }));
    let decoded = JwtDecoder.decode(&token).unwrap();
    assert_eq!(decoded.expires_at, None);
    assert!(!decoded.is_expired_at(i64::MAX));
}

#[test]
fn decode_floors_fractional_exp() {
    let token = jwt_with_payload(&json!({ "exp": 1_700_000_000.9 }));
    assert_eq!(JwtDecoder.decode(&token).unwrap().expires_at, Some(1_700_000_000));
}

#[test]
fn decode_tolerates_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":10}"#);
    let token = format!("{header}.{body}.sig");
    assert_eq!(JwtDecoder.decode(&token).unwrap().expires_at, Some(10));
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(JwtDecoder.decode("not-a-jwt"), Err(DecodeError::Malformed));
    assert_eq!(JwtDecoder.decode("a.b"), Err(DecodeError::Malformed));
    assert_eq!(JwtDecoder.decode("a.b.c.d"), Err(DecodeError::Malformed));
    assert_eq!(JwtDecoder.decode("a..c"), Err(DecodeError::Malformed));
}

#[test]
fn decode_rejects_bad_base64() {
    let err = JwtDecoder.decode("aGVhZGVy.***.sig").unwrap_err();
    assert!(matches!(err, DecodeError::Base64(_)));
}

#[test]
fn decode_rejects_non_object_payload() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2]"));
    assert!(matches!(JwtDecoder.decode(&token), Err(DecodeError::Json(_))));
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
    assert!(matches!(JwtDecoder.decode(&token), Err(DecodeError::Json(_))));
}

#[test]
fn decode_rejects_string_exp() {
    let token = jwt_with_payload(&json!({ "exp": "tomorrow" }));
    assert_eq!(JwtDecoder.decode(&token), Err(DecodeError::InvalidExpiry));
}

// =============================================================
// DecodedToken::is_expired_at
// =============================================================

#[test]
fn expiry_boundary_counts_as_expired() {
    let token = DecodedToken { expires_at: Some(100), claims: json!({}) };
    assert!(token.is_expired_at(100));
    assert!(token.is_expired_at(101));
    assert!(!token.is_expired_at(99));
}
