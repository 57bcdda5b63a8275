//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::session::SessionManager;
use crate::state::session::SessionContext;
use crate::state::tasks::TasksState;
use crate::util::route_guard::{AppRoute, RouteGuard};

/// Root application component.
///
/// Builds the single session instance, provides shared state contexts, starts
/// boot resolution, and sets up client-side routing behind the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::new(config.api_base_url.clone());
    let session = SessionContext::new(SessionManager::browser(&config, api.clone()));
    let tasks = RwSignal::new(TasksState::default());

    provide_context(api);
    provide_context(session.clone());
    provide_context(tasks);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.resolve().await;
    });

    view! {
        <Title text="Task Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <RouteGuard route=AppRoute::Root/> }/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGuard route=AppRoute::Login><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <RouteGuard route=AppRoute::Register><RegisterPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RouteGuard route=AppRoute::Dashboard><DashboardPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
