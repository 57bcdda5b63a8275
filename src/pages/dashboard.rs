//! Dashboard page: summary statistics and the filterable task list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route; the route guard keeps signed-out
//! visitors away. Task data is fetched directly from the REST API with the
//! session's bearer token.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::summary_cards::SummaryCards;
use crate::components::task_item::TaskItem;
use crate::net::types::{Priority, TaskStatus};
use crate::state::session::{SessionContext, SessionState};
use crate::state::tasks::{PriorityFilter, TasksState};
use crate::util::route_guard::LOGIN_PATH;

#[cfg(feature = "csr")]
use crate::net::api::ApiClient;

pub(crate) const LOAD_FAILED: &str = "Failed to load tasks. Please try again.";
pub(crate) const STATUS_FAILED: &str = "Failed to change task status. Please try again.";
pub(crate) const DELETE_FAILED: &str = "Failed to delete task. Please try again.";

/// Name shown in the welcome line.
pub(crate) fn display_name(state: &SessionState) -> String {
    state
        .current_user
        .as_ref()
        .map(|u| u.username.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("User")
        .to_owned()
}

/// Dashboard page — summary cards, search, priority filter, and task list.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    let api = expect_context::<ApiClient>();

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        let session = session.clone();
        tasks.update(|t| t.loading = true);
        leptos::task::spawn_local(async move {
            let Some(token) = session.bearer_token() else {
                tasks.update(|t| t.fail(LOAD_FAILED));
                return;
            };
            match api.fetch_tasks(&token).await {
                Ok(items) => tasks.update(|t| t.replace_all(items)),
                Err(e) => {
                    leptos::logging::warn!("task fetch failed: {e}");
                    tasks.update(|t| t.fail(LOAD_FAILED));
                }
            }
        });
    }

    let on_status = Callback::new({
        #[cfg(feature = "csr")]
        let api = api.clone();
        let session = session.clone();
        move |(task_id, status): (String, TaskStatus)| {
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                let Some(token) = session.bearer_token() else {
                    return;
                };
                leptos::task::spawn_local(async move {
                    match api.set_task_status(&token, &task_id, status).await {
                        Ok(()) => tasks.update(|t| t.set_status(&task_id, status)),
                        Err(e) => {
                            leptos::logging::warn!("status change failed: {e}");
                            tasks.update(|t| t.error = Some(STATUS_FAILED.to_owned()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&session, task_id, status);
            }
        }
    });
    let on_complete = Callback::new(move |task_id: String| on_status.run((task_id, TaskStatus::Completed)));

    let on_delete = Callback::new({
        #[cfg(feature = "csr")]
        let api = api.clone();
        let session = session.clone();
        move |task_id: String| {
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                let Some(token) = session.bearer_token() else {
                    return;
                };
                leptos::task::spawn_local(async move {
                    match api.delete_task(&token, &task_id).await {
                        Ok(()) => tasks.update(|t| t.remove(&task_id)),
                        Err(e) => {
                            leptos::logging::warn!("task delete failed: {e}");
                            tasks.update(|t| t.error = Some(DELETE_FAILED.to_owned()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&session, task_id);
            }
        }
    });

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            tasks.set(TasksState::default());
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    let state = session.state();
    let username = Signal::derive(move || display_name(&state.get()));
    let summary = Signal::derive(move || tasks.get().summary());
    let profile_picture = move || state.get().current_user.and_then(|u| u.profile_picture);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2 class="dashboard-page__title">"TASK MANAGER"</h2>
                <span class="dashboard-page__spacer"></span>
                {move || profile_picture().map(|src| view! { <img class="dashboard-page__avatar" src=src alt="Profile"/> })}
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <Show when=move || tasks.get().error.is_some()>
                <p class="dashboard-page__error">{move || tasks.get().error.unwrap_or_default()}</p>
            </Show>

            <SummaryCards summary=summary username=username on_status=on_status/>

            <section class="task-list">
                <div class="task-list__filters">
                    <input
                        class="task-list__search"
                        type="text"
                        placeholder="Search tasks..."
                        prop:value=move || tasks.get().search
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            tasks.update(|t| t.search = value);
                        }
                    />
                    <select
                        class="task-list__priority"
                        prop:value=move || tasks.get().priority_filter.value()
                        on:change=move |ev| {
                            let filter = PriorityFilter::from_value(&event_target_value(&ev));
                            tasks.update(|t| t.priority_filter = filter);
                        }
                    >
                        <option value="All">"All Priorities"</option>
                        {Priority::ALL
                            .into_iter()
                            .map(|p| view! { <option value={p.as_str()}>{p.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <Show
                    when=move || !tasks.get().loading
                    fallback=move || view! { <p>"Loading tasks..."</p> }
                >
                    {move || {
                        let visible = tasks.get().filtered();
                        if visible.is_empty() {
                            view! { <p>"No tasks found."</p> }.into_any()
                        } else {
                            visible
                                .into_iter()
                                .map(|task| view! { <TaskItem task=task on_complete=on_complete on_delete=on_delete/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </Show>
            </section>
        </div>
    }
}
