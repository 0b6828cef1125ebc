//! Task endpoints: CRUD, hierarchy, and tree assembly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Db, Link, SharedDb};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[derive(Deserialize)]
pub struct CreateTask {
    pub note_id: Option<i32>,
    #[serde(default)]
    pub status: TaskStatus,
    pub effort_estimate: Option<f64>,
    pub actual_effort: Option<f64>,
    pub deadline: Option<NaiveDateTime>,
    pub priority: Option<i32>,
    #[serde(default)]
    pub all_day: bool,
    pub goal_relationship: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub note_id: Option<i32>,
    pub status: Option<TaskStatus>,
    pub effort_estimate: Option<f64>,
    pub actual_effort: Option<f64>,
    pub deadline: Option<NaiveDateTime>,
    pub priority: Option<i32>,
    pub all_day: Option<bool>,
    pub goal_relationship: Option<String>,
}

#[derive(Deserialize)]
pub struct AttachTask {
    pub child_task_id: i32,
    pub parent_task_id: i32,
}

#[derive(Serialize)]
pub struct Relation {
    pub parent_id: i32,
    pub child_id: i32,
}

/// Nested task shape for `GET /tasks/tree`.
#[derive(Debug, Clone, Serialize)]
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
    pub children: Vec<TreeTask>,
}

pub fn router() -> Router<SharedDb> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/tree", get(tasks_tree))
        .route("/tasks/hierarchy", get(task_relations))
        .route("/tasks/hierarchy/attach", post(attach_task))
        .route("/tasks/hierarchy/detach/{id}", delete(detach_task))
}

async fn create_task(
    State(db): State<SharedDb>,
    Json(input): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    let mut db = db.write().await;
    if let Some(note_id) = input.note_id {
        if !db.notes.contains_key(&note_id) {
            return Err(StatusCode::NOT_FOUND);
        }
    }
    let now = Utc::now().naive_utc();
    let task = Task {
        id: db.next_task_id(),
        note_id: input.note_id,
        status: input.status,
        effort_estimate: input.effort_estimate,
        actual_effort: input.actual_effort,
        deadline: input.deadline,
        priority: input.priority,
        created_at: now,
        modified_at: now,
        all_day: input.all_day,
        goal_relationship: input.goal_relationship,
    };
    db.tasks.insert(task.id, task.clone());
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_tasks(State(db): State<SharedDb>) -> Json<Vec<Task>> {
    let db = db.read().await;
    Json(db.tasks.values().cloned().collect())
}

async fn get_task(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, StatusCode> {
    let db = db.read().await;
    db.tasks.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateTask>,
) -> Result<Json<Task>, StatusCode> {
    let mut db = db.write().await;
    let task = db.tasks.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(note_id) = input.note_id {
        task.note_id = Some(note_id);
    }
    if let Some(status) = input.status {
        task.status = status;
    }
    if let Some(effort_estimate) = input.effort_estimate {
        task.effort_estimate = Some(effort_estimate);
    }
    if let Some(actual_effort) = input.actual_effort {
        task.actual_effort = Some(actual_effort);
    }
    if let Some(deadline) = input.deadline {
        task.deadline = Some(deadline);
    }
    if let Some(priority) = input.priority {
        task.priority = Some(priority);
    }
    if let Some(all_day) = input.all_day {
        task.all_day = all_day;
    }
    if let Some(goal_relationship) = input.goal_relationship {
        task.goal_relationship = Some(goal_relationship);
    }
    task.modified_at = Utc::now().naive_utc();
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    db.tasks.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    db.task_links
        .retain(|link| link.parent_id != id && link.child_id != id);
    Ok(StatusCode::NO_CONTENT)
}

async fn attach_task(State(db): State<SharedDb>, Json(input): Json<AttachTask>) -> StatusCode {
    let mut db = db.write().await;
    if !db.tasks.contains_key(&input.child_task_id)
        || !db.tasks.contains_key(&input.parent_task_id)
    {
        return StatusCode::NOT_FOUND;
    }
    // re-parent: a task has at most one parent
    db.task_links
        .retain(|link| link.child_id != input.child_task_id);
    db.task_links.push(Link {
        parent_id: input.parent_task_id,
        child_id: input.child_task_id,
    });
    StatusCode::CREATED
}

async fn detach_task(State(db): State<SharedDb>, Path(id): Path<i32>) -> StatusCode {
    let mut db = db.write().await;
    let before = db.task_links.len();
    db.task_links.retain(|link| link.child_id != id);
    if db.task_links.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn task_relations(State(db): State<SharedDb>) -> Json<Vec<Relation>> {
    let db = db.read().await;
    Json(
        db.task_links
            .iter()
            .map(|link| Relation {
                parent_id: link.parent_id,
                child_id: link.child_id,
            })
            .collect(),
    )
}

async fn tasks_tree(State(db): State<SharedDb>) -> Json<Vec<TreeTask>> {
    let db = db.read().await;
    let forest = db
        .tasks
        .keys()
        .filter(|id| !db.task_links.iter().any(|link| link.child_id == **id))
        .map(|id| build_tree_task(&db, *id))
        .collect();
    Json(forest)
}

fn build_tree_task(db: &Db, id: i32) -> TreeTask {
    let task = &db.tasks[&id];
    let children = db
        .task_links
        .iter()
        .filter(|link| link.parent_id == id)
        .map(|link| build_tree_task(db, link.child_id))
        .collect();
    TreeTask {
        id,
        note_id: task.note_id,
        status: task.status,
        effort_estimate: task.effort_estimate,
        actual_effort: task.actual_effort,
        deadline: task.deadline,
        priority: task.priority,
        created_at: task.created_at,
        modified_at: task.modified_at,
        all_day: task.all_day,
        goal_relationship: task.goal_relationship.clone(),
        children,
    }
}
