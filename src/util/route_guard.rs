//! Navigation guard deciding which routes the current session may see.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view is wrapped in [`RouteGuard`]. The decision itself is the
//! pure [`resolve_route`]; the component only renders a loading view, issues
//! the redirect, or renders its children.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_screen::LoadingScreen;
use crate::state::session::{SessionContext, SessionState};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Authenticated landing route.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Routes the guard knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    Dashboard,
    Unknown,
}

impl AppRoute {
    /// Classify a path, ignoring ASCII case and a trailing slash.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::Root;
        }
        [(LOGIN_PATH, Self::Login), (REGISTER_PATH, Self::Register), (DASHBOARD_PATH, Self::Dashboard)]
            .into_iter()
            .find(|(p, _)| trimmed.eq_ignore_ascii_case(p))
            .map_or(Self::Unknown, |(_, route)| route)
    }

    /// Routes only reachable without a session.
    pub fn is_guest_only(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Routes only reachable with a session.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Outcome of a navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; show the neutral loading view.
    Loading,
    Allow,
    RedirectTo(&'static str),
}

/// Decide whether `path` may render for `session`.
pub fn resolve_route(path: &str, session: &SessionState) -> RouteDecision {
    decide(AppRoute::from_path(path), session)
}

/// [`resolve_route`] for an already classified route.
pub fn decide(route: AppRoute, session: &SessionState) -> RouteDecision {
    if session.loading {
        return RouteDecision::Loading;
    }
    let signed_in = session.is_authenticated();
    match route {
        AppRoute::Root if signed_in => RouteDecision::RedirectTo(DASHBOARD_PATH),
        AppRoute::Root => RouteDecision::RedirectTo(LOGIN_PATH),
        r if r.is_guest_only() && signed_in => RouteDecision::RedirectTo(DASHBOARD_PATH),
        r if r.is_protected() && !signed_in => RouteDecision::RedirectTo(LOGIN_PATH),
        _ => RouteDecision::Allow,
    }
}

/// Renders `children` only when the session may see `route`; otherwise shows
/// the loading view or silently redirects.
#[component]
pub fn RouteGuard(route: AppRoute, #[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state();
    let decision = Memo::new(move |_| decide(route, &state.get()));

    let navigate = use_navigate();
    Effect::new(move || {
        if let RouteDecision::RedirectTo(target) = decision.get() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        RouteDecision::Loading => view! { <LoadingScreen/> }.into_any(),
        RouteDecision::RedirectTo(_) => ().into_any(),
        RouteDecision::Allow => children.as_ref().map(|c| c()).into_any(),
    }
}
