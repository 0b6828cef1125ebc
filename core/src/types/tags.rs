//! Tag resource DTOs, note-tag associations, and the tag tree shape.

use serde::{Deserialize, Serialize};

use super::notes::TreeNote;

/// A tag as returned by the flat endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Payload for `POST /tags` and `PUT /tags/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

/// Payload for `POST /tags/notes`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttachTagRequest {
    pub note_id: i32,
    pub tag_id: i32,
}

/// One note-tag association from `GET /tags/notes`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteTagRelation {
    pub note_id: i32,
    pub tag_id: i32,
}

/// One parent-child link from `GET /tags/hierarchy`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagHierarchyRelation {
    pub parent_id: i32,
    pub child_id: i32,
}

/// Payload for `POST /tags/hierarchy/attach`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttachTagHierarchyRequest {
    pub parent_id: i32,
    pub child_id: i32,
}

/// Tag reference embedded in tree note responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeTag {
    pub id: i32,
    pub name: String,
}

/// A tag in the nested `GET /tags/tree` response, carrying its child tags
/// and the note subtrees attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeTagWithNotes {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeTagWithNotes>,
    #[serde(default)]
    pub notes: Vec<TreeNote>,
}
