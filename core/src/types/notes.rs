//! Note resource DTOs: flat views, request payloads, and the tree shape.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::tags::TreeTag;

/// Hierarchy type the backend assigns when none is given.
pub const DEFAULT_HIERARCHY_TYPE: &str = "block";

/// A note as returned by the flat endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// A note with the `content` field excluded (`exclude_content=true`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteWithoutContent {
    pub id: i32,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Payload for `POST /notes/flat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Payload for `PUT /notes/flat/{id}`. Omitted fields are left unchanged
/// on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Payload for `POST /notes/hierarchy/attach`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachNoteRequest {
    pub child_note_id: i32,
    pub parent_note_id: i32,
    pub hierarchy_type: String,
}

/// One parent-child link from `GET /notes/hierarchy`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteHierarchyRelation {
    pub parent_id: i32,
    pub child_id: i32,
}

/// A note in the nested `GET /notes/tree` response. The same shape is sent
/// back in `PUT /notes/tree`; fields left as `None` are not serialized, so
/// a structural update does not have to echo content or timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeNote {
    pub id: i32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_type: Option<String>,
    #[serde(default)]
    pub children: Vec<TreeNote>,
    #[serde(default)]
    pub tags: Vec<TreeTag>,
}
