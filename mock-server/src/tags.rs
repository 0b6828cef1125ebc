//! Tag endpoints: CRUD, note associations, hierarchy, and tree assembly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::notes::{build_tree_note, TreeNote};
use crate::{Db, Link, SharedDb};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateTag {
    pub name: String,
}

#[derive(Deserialize)]
pub struct AttachTag {
    pub note_id: i32,
    pub tag_id: i32,
}

#[derive(Serialize)]
pub struct NoteTagRelation {
    pub note_id: i32,
    pub tag_id: i32,
}

#[derive(Deserialize)]
pub struct AttachTagHierarchy {
    pub parent_id: i32,
    pub child_id: i32,
}

#[derive(Serialize)]
pub struct Relation {
    pub parent_id: i32,
    pub child_id: i32,
}

/// Tag reference embedded in tree note responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeTag {
    pub id: i32,
    pub name: String,
}

/// Nested tag shape for `GET /tags/tree`, carrying attached note subtrees.
#[derive(Debug, Clone, Serialize)]
pub struct TreeTagWithNotes {
    pub id: i32,
    pub name: String,
    pub children: Vec<TreeTagWithNotes>,
    pub notes: Vec<TreeNote>,
}

pub fn router() -> Router<SharedDb> {
    Router::new()
        .route("/tags", get(list_tags).post(create_tag))
        .route(
            "/tags/{id}",
            get(get_tag).put(update_tag).delete(delete_tag),
        )
        .route("/tags/tree", get(tags_tree))
        .route("/tags/notes", get(note_tag_relations).post(attach_tag_to_note))
        .route("/tags/notes/{note_id}/{tag_id}", delete(detach_tag_from_note))
        .route("/tags/hierarchy", get(tag_relations))
        .route("/tags/hierarchy/attach", post(attach_tag_to_parent))
        .route("/tags/hierarchy/detach/{id}", delete(detach_tag_from_parent))
}

async fn create_tag(
    State(db): State<SharedDb>,
    Json(input): Json<CreateTag>,
) -> (StatusCode, Json<Tag>) {
    let mut db = db.write().await;
    let tag = Tag {
        id: db.next_tag_id(),
        name: input.name,
    };
    db.tags.insert(tag.id, tag.clone());
    (StatusCode::CREATED, Json(tag))
}

async fn list_tags(State(db): State<SharedDb>) -> Json<Vec<Tag>> {
    let db = db.read().await;
    Json(db.tags.values().cloned().collect())
}

async fn get_tag(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
) -> Result<Json<Tag>, StatusCode> {
    let db = db.read().await;
    db.tags.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_tag(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
    Json(input): Json<CreateTag>,
) -> Result<Json<Tag>, StatusCode> {
    let mut db = db.write().await;
    let tag = db.tags.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    tag.name = input.name;
    Ok(Json(tag.clone()))
}

async fn delete_tag(
    State(db): State<SharedDb>,
    Path(id): Path<i32>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    db.tags.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    db.note_tags.retain(|(_, tag_id)| *tag_id != id);
    db.tag_links
        .retain(|link| link.parent_id != id && link.child_id != id);
    Ok(StatusCode::NO_CONTENT)
}

async fn attach_tag_to_note(
    State(db): State<SharedDb>,
    Json(input): Json<AttachTag>,
) -> StatusCode {
    let mut db = db.write().await;
    if !db.notes.contains_key(&input.note_id) || !db.tags.contains_key(&input.tag_id) {
        return StatusCode::NOT_FOUND;
    }
    let pair = (input.note_id, input.tag_id);
    if !db.note_tags.contains(&pair) {
        db.note_tags.push(pair);
    }
    StatusCode::CREATED
}

async fn detach_tag_from_note(
    State(db): State<SharedDb>,
    Path((note_id, tag_id)): Path<(i32, i32)>,
) -> StatusCode {
    let mut db = db.write().await;
    let before = db.note_tags.len();
    db.note_tags.retain(|pair| *pair != (note_id, tag_id));
    if db.note_tags.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn note_tag_relations(State(db): State<SharedDb>) -> Json<Vec<NoteTagRelation>> {
    let db = db.read().await;
    Json(
        db.note_tags
            .iter()
            .map(|(note_id, tag_id)| NoteTagRelation {
                note_id: *note_id,
                tag_id: *tag_id,
            })
            .collect(),
    )
}

async fn tag_relations(State(db): State<SharedDb>) -> Json<Vec<Relation>> {
    let db = db.read().await;
    Json(
        db.tag_links
            .iter()
            .map(|link| Relation {
                parent_id: link.parent_id,
                child_id: link.child_id,
            })
            .collect(),
    )
}

async fn attach_tag_to_parent(
    State(db): State<SharedDb>,
    Json(input): Json<AttachTagHierarchy>,
) -> StatusCode {
    let mut db = db.write().await;
    if !db.tags.contains_key(&input.child_id) || !db.tags.contains_key(&input.parent_id) {
        return StatusCode::NOT_FOUND;
    }
    // re-parent: a tag has at most one parent
    db.tag_links.retain(|link| link.child_id != input.child_id);
    db.tag_links.push(Link {
        parent_id: input.parent_id,
        child_id: input.child_id,
    });
    StatusCode::CREATED
}

async fn detach_tag_from_parent(State(db): State<SharedDb>, Path(id): Path<i32>) -> StatusCode {
    let mut db = db.write().await;
    let before = db.tag_links.len();
    db.tag_links.retain(|link| link.child_id != id);
    if db.tag_links.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn tags_tree(State(db): State<SharedDb>) -> Json<Vec<TreeTagWithNotes>> {
    let db = db.read().await;
    let forest = db
        .tags
        .keys()
        .filter(|id| !db.tag_links.iter().any(|link| link.child_id == **id))
        .map(|id| build_tree_tag(&db, *id))
        .collect();
    Json(forest)
}

fn build_tree_tag(db: &Db, id: i32) -> TreeTagWithNotes {
    let tag = &db.tags[&id];
    let children = db
        .tag_links
        .iter()
        .filter(|link| link.parent_id == id)
        .map(|link| build_tree_tag(db, link.child_id))
        .collect();
    let notes = db
        .note_tags
        .iter()
        .filter(|(_, tag_id)| *tag_id == id)
        .map(|(note_id, _)| build_tree_note(db, *note_id, None))
        .collect();
    TreeTagWithNotes {
        id,
        name: tag.name.clone(),
        children,
        notes,
    }
}
