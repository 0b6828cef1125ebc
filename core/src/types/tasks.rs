//! Task resource DTOs: status enumeration, request payloads with local
//! validation, and the task tree shape.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Inclusive bounds for the `priority` field on create and update payloads.
pub const PRIORITY_MIN: i32 = 0;
pub const PRIORITY_MAX: i32 = 10;

/// Lifecycle state of a task. Wire values are snake_case; anything outside
/// this set fails deserialization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(ApiError::Validation(format!(
                "unknown task status '{other}', expected one of: todo, in_progress, done, cancelled"
            ))),
        }
    }
}

/// A task as returned by the flat endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i32,
    pub note_id: Option<i32>,
    pub status: TaskStatus,
    pub effort_estimate: Option<f64>,
    pub actual_effort: Option<f64>,
    pub deadline: Option<NaiveDateTime>,
    pub priority: Option<i32>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
    pub all_day: bool,
    pub goal_relationship: Option<String>,
}

/// Payload for `POST /tasks`. `status` defaults to `todo` and `all_day` to
/// `false`; unset optional fields are not serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<i32>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort_estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_effort: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_relationship: Option<String>,
}

impl CreateTaskRequest {
    /// Check local field constraints before a request is built.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_priority(self.priority)
    }
}

/// Payload for `PUT /tasks/{id}`. Every field is optional; omitted fields
/// are left unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort_estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_effort: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_relationship: Option<String>,
}

impl UpdateTaskRequest {
    /// Check local field constraints before a request is built.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_priority(self.priority)
    }
}

fn check_priority(priority: Option<i32>) -> Result<(), ApiError> {
    match priority {
        Some(p) if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&p) => Err(ApiError::Validation(
            format!("priority {p} out of range {PRIORITY_MIN}..={PRIORITY_MAX}"),
        )),
        _ => Ok(()),
    }
}

/// Payload for `POST /tasks/hierarchy/attach`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttachTaskRequest {
    pub child_task_id: i32,
    pub parent_task_id: i32,
}

/// One parent-child link from `GET /tasks/hierarchy`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskHierarchyRelation {
    pub parent_id: i32,
    pub child_id: i32,
}

/// A task in the nested `GET /tasks/tree` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeTask {
    pub id: i32,
    pub note_id: Option<i32>,
    pub status: TaskStatus,
    pub effort_estimate: Option<f64>,
    pub actual_effort: Option<f64>,
    pub deadline: Option<NaiveDateTime>,
    pub priority: Option<i32>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
    pub all_day: bool,
    pub goal_relationship: Option<String>,
    #[serde(default)]
    pub children: Vec<TreeTask>,
}
