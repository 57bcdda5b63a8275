use super::*;
use crate::net::types::User;

fn signed_out() -> SessionState {
    SessionState { current_user: None, loading: false, error: None }
}

fn signed_in() -> SessionState {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 1 })).unwrap();
    SessionState { current_user: Some(user), loading: false, error: None }
}

fn loading() -> SessionState {
    SessionState::default()
}

// =============================================================
// AppRoute::from_path
// =============================================================

#[test]
fn from_path_classifies_known_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Root);
    assert_eq!(AppRoute::from_path(""), AppRoute::Root);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
}

#[test]
fn from_path_ignores_case_and_trailing_slash() {
    assert_eq!(AppRoute::from_path("/Register"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/DASHBOARD/"), AppRoute::Dashboard);
}

#[test]
fn from_path_unknown_route() {
    assert_eq!(AppRoute::from_path("/settings"), AppRoute::Unknown);
    assert_eq!(AppRoute::from_path("/login/extra"), AppRoute::Unknown);
}

// =============================================================
// resolve_route
// =============================================================

#[test]
fn protected_route_redirects_to_login_when_signed_out() {
    assert_eq!(resolve_route("/dashboard", &signed_out()), RouteDecision::RedirectTo("/login"));
}

#[test]
fn protected_route_allows_signed_in_user() {
    assert_eq!(resolve_route("/dashboard", &signed_in()), RouteDecision::Allow);
}

#[test]
fn login_redirects_signed_in_user_to_dashboard() {
    assert_eq!(resolve_route("/login", &signed_in()), RouteDecision::RedirectTo("/dashboard"));
    assert_eq!(resolve_route("/register", &signed_in()), RouteDecision::RedirectTo("/dashboard"));
}

#[test]
fn guest_routes_render_when_signed_out() {
    assert_eq!(resolve_route("/login", &signed_out()), RouteDecision::Allow);
    assert_eq!(resolve_route("/register", &signed_out()), RouteDecision::Allow);
}

#[test]
fn root_redirects_by_session() {
    assert_eq!(resolve_route("/", &signed_in()), RouteDecision::RedirectTo("/dashboard"));
    assert_eq!(resolve_route("/", &signed_out()), RouteDecision::RedirectTo("/login"));
}

#[test]
fn loading_session_never_redirects() {
    for path in ["/", "/login", "/register", "/dashboard", "/elsewhere"] {
        assert_eq!(resolve_route(path, &loading()), RouteDecision::Loading);
    }
}

#[test]
fn unknown_route_is_allowed_either_way() {
    assert_eq!(resolve_route("/nowhere", &signed_out()), RouteDecision::Allow);
    assert_eq!(resolve_route("/nowhere", &signed_in()), RouteDecision::Allow);
}

#[test]
fn loading_with_stale_user_still_waits() {
    let mut state = signed_in();
    state.loading = true;
    assert_eq!(resolve_route("/login", &state), RouteDecision::Loading);
}
