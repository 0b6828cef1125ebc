//! Domain DTOs mirroring the Draftsmith wire contract.
//!
//! # Design
//! These types are defined independently from the mock-server crate; the
//! integration tests catch schema drift between the two. Request variants
//! use `#[serde(skip_serializing_if = "Option::is_none")]` so partial
//! updates only carry the fields the caller set, matching the backend's
//! merge semantics. Tree shapes default their collection fields so flat and
//! nested payloads both decode.

pub mod notes;
pub mod tags;
pub mod tasks;

pub use notes::{
    AttachNoteRequest, CreateNoteRequest, Note, NoteHierarchyRelation, NoteWithoutContent,
    TreeNote, UpdateNoteRequest, DEFAULT_HIERARCHY_TYPE,
};
pub use tags::{
    AttachTagHierarchyRequest, AttachTagRequest, CreateTagRequest, NoteTagRelation, Tag,
    TagHierarchyRelation, TreeTag, TreeTagWithNotes,
};
pub use tasks::{
    AttachTaskRequest, CreateTaskRequest, Task, TaskHierarchyRelation, TaskStatus, TreeTask,
    UpdateTaskRequest, PRIORITY_MAX, PRIORITY_MIN,
};
