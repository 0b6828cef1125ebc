//! Typed client for the Draftsmith note/task/tag HTTP API.
//!
//! # Overview
//! Draftsmith keeps notes, tasks, and tags (each with parent-child
//! hierarchies) behind a JSON/REST backend. This crate provides the typed
//! bindings: request payloads with local validation, response models, and
//! one blocking call per API operation. All business logic lives in the
//! backend — the client holds no state beyond its configuration.
//!
//! # Design
//! - [`DraftsmithClient`] is stateless and sans-io: each operation is a
//!   `build_*` / `parse_*` pair over plain-data [`HttpRequest`] /
//!   [`HttpResponse`] values.
//! - [`HttpTransport`] is the injectable I/O seam; [`UreqTransport`] is the
//!   blocking default, tests substitute fakes or the in-repo mock server.
//! - [`Draftsmith`] composes the two into the convenience surface
//!   (`note_create`, `get_notes_tree`, `create_task`, ...).
//! - Failures are one [`ApiError`] taxonomy: validation, transport, backend
//!   status, decode. Nothing is retried or swallowed.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::Draftsmith;
pub use client::{DraftsmithClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, UreqTransport};
pub use types::{
    AttachNoteRequest, AttachTagHierarchyRequest, AttachTagRequest, AttachTaskRequest,
    CreateNoteRequest, CreateTagRequest, CreateTaskRequest, Note, NoteHierarchyRelation,
    NoteTagRelation, NoteWithoutContent, Tag, TagHierarchyRelation, Task, TaskHierarchyRelation,
    TaskStatus, TreeNote, TreeTag, TreeTagWithNotes, TreeTask, UpdateNoteRequest,
    UpdateTaskRequest,
};
