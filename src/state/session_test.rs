use super::*;

fn user(id: &str) -> User {
    User { id: id.to_owned(), username: "ada".to_owned(), email: "ada@example.com".to_owned(), profile_picture: None }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_starts_loading_without_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.current_user.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// apply_resolution
// =============================================================

#[test]
fn resolution_without_token_clears_loading_only() {
    let mut state = SessionState::default();
    state.apply_resolution(Ok(None));
    assert_eq!(state, SessionState { current_user: None, loading: false, error: None });
}

#[test]
fn resolution_with_user_sets_current_user() {
    let mut state = SessionState::default();
    state.apply_resolution(Ok(Some(user("u1"))));
    assert_eq!(state.current_user, Some(user("u1")));
    assert!(!state.loading);
}

#[test]
fn resolution_failures_surface_as_session_expired() {
    for err in [SessionError::TokenInvalid, SessionError::SessionExpired] {
        let mut state = SessionState::default();
        state.apply_resolution(Err(err));
        assert_eq!(state.error, Some(SessionError::SessionExpired));
        assert!(state.current_user.is_none());
        assert!(!state.loading);
    }
}

// =============================================================
// apply_login / apply_logout
// =============================================================

#[test]
fn login_success_sets_user_and_clears_previous_error() {
    let mut state = SessionState { current_user: None, loading: false, error: Some(SessionError::SessionExpired) };
    state.apply_login(Ok(user("u2")));
    assert_eq!(state.current_user, Some(user("u2")));
    assert_eq!(state.error, None);
}

#[test]
fn login_failure_drops_user_and_clears_loading() {
    let mut state = SessionState { current_user: Some(user("old")), loading: true, error: None };
    state.apply_login(Err(SessionError::LoginFailed));
    assert!(state.current_user.is_none());
    assert_eq!(state.error, Some(SessionError::LoginFailed));
    assert!(!state.loading);
}

#[test]
fn logout_twice_matches_logout_once() {
    let mut once = SessionState { current_user: Some(user("u1")), loading: false, error: None };
    once.apply_logout();
    let mut twice = once.clone();
    twice.apply_logout();
    assert_eq!(once, twice);
    assert!(twice.current_user.is_none());
}

#[test]
fn set_current_user_replaces_profile() {
    let mut state = SessionState { current_user: Some(user("u1")), loading: false, error: None };
    let mut updated = user("u1");
    updated.profile_picture = Some("https://cdn.example.com/p.png".to_owned());
    state.set_current_user(updated.clone());
    assert_eq!(state.current_user, Some(updated));
}

#[test]
fn dismiss_error_keeps_user() {
    let mut state = SessionState { current_user: None, loading: false, error: Some(SessionError::LoginFailed) };
    state.dismiss_error();
    assert_eq!(state.error, None);
}

#[test]
fn session_error_messages_are_user_facing() {
    assert_eq!(SessionError::SessionExpired.to_string(), "Session expired or invalid token");
    assert_eq!(SessionError::LoginFailed.to_string(), "Login failed. Please try again.");
}

#[test]
fn unix_now_is_after_2020() {
    assert!(unix_now() > 1_577_836_800);
}
