//! Note endpoints: flat CRUD, hierarchy, and tree assembly.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tags::TreeTag;
use crate::{Db, NoteLink, SharedDb};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteWithoutContent {
    pub id: i32,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

impl From<&Note> for NoteWithoutContent {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            created_at: note.created_at,
            modified_at: note.modified_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Deserialize)]
pub struct AttachNote {
    pub child_note_id: i32,
    pub parent_note_id: i32,
    #[serde(default = "default_hierarchy_type")]
    pub hierarchy_type: String,
}

fn default_hierarchy_type() -> String {
    "block".to_string()
}

#[derive(Serialize)]
pub struct Relation {
    pub parent_id: i32,
    pub child_id: i32,
}

/// Nested note shape for `GET /notes/tree` and `PUT /notes/tree`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNote {
    pub id: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_type: Option<String>,
    #[serde(default)]
    pub children: Vec<TreeNote>,
    #[serde(default)]
    pub tags: Vec<TreeTag>,
}

#[derive(Deserialize)]
pub struct ContentQuery {
    #[serde(default)]
    pub exclude_content: bool,
}

pub fn router() -> Router<SharedDb> {
    Router::new()
        .route("/notes/flat", get(list_notes).post(create_note))
        .route(
            "/notes/flat/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/notes/tree", get(notes_tree).put(replace_notes_tree))
        .route("/notes/hierarchy", get(note_relations))
        .route("/notes/hierarchy/attach", post(attach_note))
        .route("/notes/hierarchy/detach/{id}", delete(detach_note))
}

async fn create_note(
    State(db): State<SharedDb>,
    Json(input): Json<CreateNote>,
) -> (StatusCode, Json<Note>) {
    let mut db = db.write().await;
    let now = Utc::now().naive_utc();
    let note = Note {
        id: db.next_note_id(),
        title: input.title,
        content: input.content,
        created_at: now,
        modified_at: now,
    };
    db.notes.insert(note.id, note.clone());
    (StatusCode::CREATED, Json(note))
}

async fn list_notes(State(db): State<SharedDb>, Query(query): Query<ContentQuery>) -> Response {
    let db = db.read().await;
    if query.exclude_content {
        let notes: Vec<NoteWithoutContent> =
            db.notes.values().map(NoteWithoutContent::from).collect();
        Json(notes).into_response()
    } else {
        let notes: Vec<Note> = db.notes.values().cloned().collect();
        Json(notes).into_response()
    }
}

async fn get_note(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
    Query(query): Query<ContentQuery>,
) -> Result<Response, StatusCode> {
    let db = db.read().await;
    let note = db.notes.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    if query.exclude_content {
        Ok(Json(NoteWithoutContent::from(note)).into_response())
    } else {
        Ok(Json(note.clone()).into_response())
    }
}

async fn update_note(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateNote>,
) -> Result<Json<Note>, StatusCode> {
    let mut db = db.write().await;
    let note = db.notes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        note.title = title;
    }
    if let Some(content) = input.content {
        note.content = content;
    }
    note.modified_at = Utc::now().naive_utc();
    Ok(Json(note.clone()))
}

async fn delete_note(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    db.notes.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    db.note_links
        .retain(|link| link.parent_id != id && link.child_id != id);
    db.note_tags.retain(|(note_id, _)| *note_id != id);
    Ok(StatusCode::NO_CONTENT)
}

async fn attach_note(State(db): State<SharedDb>, Json(input): Json<AttachNote>) -> StatusCode {
    let mut db = db.write().await;
    if !db.notes.contains_key(&input.child_note_id)
        || !db.notes.contains_key(&input.parent_note_id)
    {
        return StatusCode::NOT_FOUND;
    }
    // re-parent: a note has at most one parent
    db.note_links
        .retain(|link| link.child_id != input.child_note_id);
    db.note_links.push(NoteLink {
        parent_id: input.parent_note_id,
        child_id: input.child_note_id,
        hierarchy_type: input.hierarchy_type,
    });
    StatusCode::CREATED
}

async fn detach_note(State(db): State<SharedDb>, Path(id): Path<i32>) -> StatusCode {
    let mut db = db.write().await;
    let before = db.note_links.len();
    db.note_links.retain(|link| link.child_id != id);
    if db.note_links.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn note_relations(State(db): State<SharedDb>) -> Json<Vec<Relation>> {
    let db = db.read().await;
    Json(
        db.note_links
            .iter()
            .map(|link| Relation {
                parent_id: link.parent_id,
                child_id: link.child_id,
            })
            .collect(),
    )
}

async fn notes_tree(State(db): State<SharedDb>) -> Json<Vec<TreeNote>> {
    let db = db.read().await;
    Json(build_note_forest(&db))
}

/// Replace the whole hierarchy with the supplied forest, applying any
/// title/content carried on the nodes.
async fn replace_notes_tree(
    State(db): State<SharedDb>,
    Json(forest): Json<Vec<TreeNote>>,
) -> StatusCode {
    fn flatten<'a>(nodes: &'a [TreeNote], out: &mut Vec<&'a TreeNote>) {
        for node in nodes {
            out.push(node);
            flatten(&node.children, out);
        }
    }

    let mut db = db.write().await;
    let mut flat = Vec::new();
    flatten(&forest, &mut flat);
    if flat.iter().any(|node| !db.notes.contains_key(&node.id)) {
        return StatusCode::NOT_FOUND;
    }

    for node in &flat {
        if let Some(note) = db.notes.get_mut(&node.id) {
            note.title = node.title.clone();
            if let Some(content) = &node.content {
                note.content = content.clone();
            }
        }
    }

    db.note_links.clear();
    fn link_children(db: &mut Db, parent: &TreeNote) {
        for child in &parent.children {
            db.note_links.push(NoteLink {
                parent_id: parent.id,
                child_id: child.id,
                hierarchy_type: child
                    .hierarchy_type
                    .clone()
                    .unwrap_or_else(default_hierarchy_type),
            });
            link_children(db, child);
        }
    }
    for root in &forest {
        link_children(&mut db, root);
    }
    StatusCode::NO_CONTENT
}

pub(crate) fn build_note_forest(db: &Db) -> Vec<TreeNote> {
    db.notes
        .keys()
        .filter(|id| !db.note_links.iter().any(|link| link.child_id == **id))
        .map(|id| build_tree_note(db, *id, None))
        .collect()
}

pub(crate) fn build_tree_note(db: &Db, id: i32, hierarchy_type: Option<String>) -> TreeNote {
    let note = &db.notes[&id];
    let children = db
        .note_links
        .iter()
        .filter(|link| link.parent_id == id)
        .map(|link| build_tree_note(db, link.child_id, Some(link.hierarchy_type.clone())))
        .collect();
    let tags = db
        .note_tags
        .iter()
        .filter(|(note_id, _)| *note_id == id)
        .filter_map(|(_, tag_id)| db.tags.get(tag_id))
        .map(|tag| TreeTag {
            id: tag.id,
            name: tag.name.clone(),
        })
        .collect();
    TreeNote {
        id,
        title: note.title.clone(),
        content: Some(note.content.clone()),
        created_at: Some(note.created_at),
        modified_at: Some(note.modified_at),
        hierarchy_type,
        children,
        tags,
    }
}
