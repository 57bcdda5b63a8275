//! Task row for the dashboard list.

#[cfg(test)]
#[path = "task_item_test.rs"]
mod task_item_test;

use leptos::prelude::*;

use crate::net::types::{Priority, Task, TaskStatus};

pub(crate) fn format_deadline(task: &Task) -> String {
    task.deadline.map_or_else(|| "No deadline".to_owned(), |d| d.format("%b %-d, %Y").to_string())
}

pub(crate) fn priority_class(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::High) => "task-item__priority--high",
        Some(Priority::Medium) => "task-item__priority--medium",
        Some(Priority::Low) | None => "task-item__priority--low",
    }
}

pub(crate) fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "task-item__status--done",
        TaskStatus::InProgress => "task-item__status--active",
        TaskStatus::NotStarted | TaskStatus::Pending => "task-item__status--todo",
    }
}

/// A single task with complete and delete actions.
#[component]
pub fn TaskItem(task: Task, on_complete: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let deadline = format_deadline(&task);
    let completed = task.status.is_completed();
    let complete_id = task.id.clone();
    let delete_id = task.id.clone();
    let Task { title, description, priority, status, .. } = task;
    let priority_label = priority.map_or("None", Priority::as_str);

    view! {
        <div class="task-item">
            <h3 class="task-item__title">{title}</h3>
            <p class="task-item__description">{description}</p>
            <div class="task-item__meta">
                <span class="task-item__label">"Priority: "</span>
                <span class={priority_class(priority)}>{priority_label}</span>
            </div>
            <div class="task-item__meta">
                <span class="task-item__label">"Deadline: "</span>
                <span>{deadline}</span>
            </div>
            <div class="task-item__meta">
                <span class="task-item__label">"Status: "</span>
                <span class={status_class(status)}>{status.label()}</span>
            </div>
            <div class="task-item__actions">
                <Show when=move || !completed>
                    <button
                        class="btn task-item__complete"
                        on:click={
                            let id = complete_id.clone();
                            move |_| on_complete.run(id.clone())
                        }
                    >
                        "Mark as Completed"
                    </button>
                </Show>
                <button class="btn task-item__delete" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
