//! Summary statistics panel at the top of the dashboard.

use leptos::prelude::*;

use crate::components::task_item::format_deadline;
use crate::net::types::TaskStatus;
use crate::state::tasks::TaskSummary;

/// Total/completed/pending counts plus the latest and most urgent task.
/// The latest task can be flipped between completed and pending in place.
#[component]
pub fn SummaryCards(
    #[prop(into)] summary: Signal<TaskSummary>,
    #[prop(into)] username: Signal<String>,
    on_status: Callback<(String, TaskStatus)>,
) -> impl IntoView {
    let latest = move || {
        summary.get().latest.map_or_else(
            || view! { <p>"No tasks available."</p> }.into_any(),
            |task| {
                let next = task.status.toggled();
                let task_id = task.id.clone();
                view! {
                    <p>"Title: " {task.title}</p>
                    <p>"Status: " {task.status.label()}</p>
                    <button
                        class="btn summary__toggle"
                        on:click=move |_| on_status.run((task_id.clone(), next))
                    >
                        "Mark as " {next.label()}
                    </button>
                }
                .into_any()
            },
        )
    };
    let nearest = move || {
        summary.get().nearest_deadline.map_or_else(
            || view! { <p>"No tasks near the deadline."</p> }.into_any(),
            |task| {
                let deadline = format_deadline(&task);
                view! {
                    <p>"Title: " {task.title}</p>
                    <p>"Deadline: " {deadline}</p>
                }
                .into_any()
            },
        )
    };

    view! {
        <section class="summary">
            <div class="summary__counts">
                <div class="summary__card summary__card--total">
                    <h3>"Total Tasks"</h3>
                    <p>{move || summary.get().total}</p>
                </div>
                <div class="summary__card summary__card--completed">
                    <h3>"Completed Tasks"</h3>
                    <p>{move || summary.get().completed}</p>
                </div>
                <div class="summary__card summary__card--pending">
                    <h3>"Pending Tasks"</h3>
                    <p>{move || summary.get().pending}</p>
                </div>
            </div>
            <h3 class="summary__welcome">"Welcome Back, " {move || username.get()} "!"</h3>
            <div class="summary__highlights">
                <div class="summary__card">
                    <h3>"Latest Task"</h3>
                    {latest}
                </div>
                <div class="summary__card">
                    <h3>"Task Nearing Deadline"</h3>
                    {nearest}
                </div>
            </div>
        </section>
    }
}
