//! Task list state for the dashboard.
//!
//! DESIGN
//! ======
//! Items are kept in server order; search and priority filtering are views
//! computed on demand so clearing a filter never needs a refetch.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{Priority, Task, TaskStatus};

/// Priority selector for the task list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => task.priority == Some(p),
        }
    }

    /// Parse the `<select>` value; unknown values fall back to `All`.
    pub fn from_value(raw: &str) -> Self {
        Priority::parse(raw).map_or(Self::All, Self::Only)
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(p) => p.as_str(),
        }
    }
}

/// Task list plus the dashboard's search/filter inputs.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub priority_filter: PriorityFilter,
}

impl TasksState {
    /// Tasks whose title contains `search` (case-insensitive) and that pass
    /// the priority filter, in server order.
    pub fn filtered(&self) -> Vec<Task> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
            .filter(|t| self.priority_filter.matches(t))
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary::from_tasks(&self.items)
    }

    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.items = tasks;
        self.loading = false;
        self.error = None;
    }

    pub fn remove(&mut self, task_id: &str) {
        self.items.retain(|t| t.id != task_id);
    }

    /// Local status change applied once the server accepted it.
    pub fn set_status(&mut self, task_id: &str, status: TaskStatus) {
        if let Some(task) = self.items.iter_mut().find(|t| t.id == task_id) {
            task.status = status;
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

/// Dashboard summary statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// First task in server order.
    pub latest: Option<Task>,
    /// Task with the earliest deadline among those that have one.
    pub nearest_deadline: Option<Task>,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.status.is_completed()).count();
        let nearest_deadline = tasks
            .iter()
            .filter_map(|t| t.deadline.map(|d| (d, t)))
            .min_by_key(|(d, _)| *d)
            .map(|(_, t)| t.clone());
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
            latest: tasks.first().cloned(),
            nearest_deadline,
        }
    }
}
