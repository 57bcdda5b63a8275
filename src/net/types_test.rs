use super::*;
use serde_json::json;

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_value(json!({ "id": 1 })).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "");
    assert_eq!(user.profile_picture, None);
}

#[test]
fn user_accepts_mongo_style_id_and_camel_case_picture() {
    let user: User = serde_json::from_value(json!({
        "_id": "6650a1",
        "username": "ada",
        "email": "ada@example.com",
        "profilePicture": "https://cdn.example.com/ada.png"
    }))
    .unwrap();
    assert_eq!(user.id, "6650a1");
    assert_eq!(user.username, "ada");
    assert_eq!(user.profile_picture.as_deref(), Some("https://cdn.example.com/ada.png"));
}

#[test]
fn user_rejects_object_id() {
    let err = serde_json::from_value::<User>(json!({ "id": { "oid": "x" } })).unwrap_err();
    assert!(err.to_string().contains("expected string or number id"));
}

// =============================================================
// Task
// =============================================================

#[test]
fn task_parses_server_shape() {
    let task: Task = serde_json::from_value(json!({
        "_id": "t1",
        "title": "Write report",
        "description": "Q3 numbers",
        "priority": "High",
        "deadline": "2024-11-02T00:00:00.000Z",
        "status": "In Progress"
    }))
    .unwrap();
    assert_eq!(task.id, "t1");
    assert_eq!(task.priority, Some(Priority::High));
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.deadline.map(|d| d.to_rfc3339()), Some("2024-11-02T00:00:00+00:00".to_owned()));
}

#[test]
fn task_missing_optional_fields_use_defaults() {
    let task: Task = serde_json::from_value(json!({ "_id": "t2", "title": "Bare" })).unwrap();
    assert_eq!(task.description, "");
    assert_eq!(task.priority, None);
    assert_eq!(task.deadline, None);
    assert_eq!(task.status, TaskStatus::NotStarted);
}

#[test]
fn status_update_serializes_label() {
    let body = serde_json::to_value(StatusUpdate { status: TaskStatus::Completed }).unwrap();
    assert_eq!(body, json!({ "status": "Completed" }));
    let body = serde_json::to_value(StatusUpdate { status: TaskStatus::NotStarted }).unwrap();
    assert_eq!(body, json!({ "status": "Not Started" }));
}

#[test]
fn toggled_flips_between_completed_and_pending() {
    assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
    assert_eq!(TaskStatus::InProgress.toggled(), TaskStatus::Completed);
    assert_eq!(TaskStatus::NotStarted.toggled(), TaskStatus::Completed);
}

#[test]
fn priority_parse_matches_labels() {
    assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
    assert_eq!(Priority::parse("medium"), None);
    assert_eq!(Priority::parse("All"), None);
}

#[test]
fn task_list_response_defaults_to_empty() {
    let body: TaskListResponse = serde_json::from_value(json!({})).unwrap();
    assert!(body.tasks.is_empty());
}

#[test]
fn login_response_keeps_only_token() {
    let body: LoginResponse =
        serde_json::from_value(json!({ "token": "abc", "user": { "id": 1, "username": "ana" } })).unwrap();
    assert_eq!(body.token, "abc");
}
