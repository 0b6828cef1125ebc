//! Blocking convenience API: one method per Draftsmith operation.
//!
//! # Design
//! [`Draftsmith`] owns a [`DraftsmithClient`] and a boxed [`HttpTransport`]
//! and wires them together: every method builds a request, executes it, and
//! parses the response. Each call blocks until the response arrives or the
//! transport's timeout fires; there is no retry, caching, or shared mutable
//! state. Method names follow the backend's operation names.

use std::time::Duration;

use crate::client::{DraftsmithClient, DEFAULT_BASE_URL};
use crate::error::ApiError;
use crate::transport::{HttpTransport, UreqTransport};
use crate::types::{
    AttachNoteRequest, AttachTagHierarchyRequest, AttachTagRequest, AttachTaskRequest,
    CreateNoteRequest, CreateTagRequest, CreateTaskRequest, Note, NoteHierarchyRelation,
    NoteTagRelation, NoteWithoutContent, Tag, TagHierarchyRelation, Task, TaskHierarchyRelation,
    TreeNote, TreeTagWithNotes, TreeTask, UpdateNoteRequest, UpdateTaskRequest,
};

/// Blocking handle to a Draftsmith backend.
pub struct Draftsmith {
    client: DraftsmithClient,
    transport: Box<dyn HttpTransport>,
}

impl Draftsmith {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: DraftsmithClient::new(base_url),
            transport: Box::new(UreqTransport::new()),
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.client = self.client.with_token(token);
        self
    }

    /// Bound every call end to end. Replaces the transport, so apply before
    /// `with_transport` if combining both.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport = Box::new(UreqTransport::with_timeout(Some(timeout)));
        self
    }

    /// Substitute the transport, e.g. a scripted fake in tests.
    pub fn with_transport(mut self, transport: Box<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    // -----------------------------------------------------------------------
    // Notes
    // -----------------------------------------------------------------------

    pub fn note_create(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        let input = CreateNoteRequest {
            title: title.to_string(),
            content: content.to_string(),
        };
        let request = self.client.build_create_note(&input)?;
        self.client.parse_create_note(self.transport.execute(&request)?)
    }

    pub fn get_note(&self, note_id: i32) -> Result<Note, ApiError> {
        let request = self.client.build_get_note(note_id);
        self.client.parse_get_note(self.transport.execute(&request)?)
    }

    pub fn get_note_without_content(&self, note_id: i32) -> Result<NoteWithoutContent, ApiError> {
        let request = self.client.build_get_note_without_content(note_id);
        self.client
            .parse_get_note_without_content(self.transport.execute(&request)?)
    }

    pub fn get_all_notes(&self) -> Result<Vec<Note>, ApiError> {
        let request = self.client.build_list_notes();
        self.client.parse_list_notes(self.transport.execute(&request)?)
    }

    pub fn get_all_notes_without_content(&self) -> Result<Vec<NoteWithoutContent>, ApiError> {
        let request = self.client.build_list_notes_without_content();
        self.client
            .parse_list_notes_without_content(self.transport.execute(&request)?)
    }

    pub fn update_note(&self, note_id: i32, input: &UpdateNoteRequest) -> Result<Note, ApiError> {
        let request = self.client.build_update_note(note_id, input)?;
        self.client.parse_update_note(self.transport.execute(&request)?)
    }

    pub fn delete_note(&self, note_id: i32) -> Result<(), ApiError> {
        let request = self.client.build_delete_note(note_id);
        self.client.parse_delete_note(self.transport.execute(&request)?)
    }

    pub fn get_notes_tree(&self) -> Result<Vec<TreeNote>, ApiError> {
        let request = self.client.build_get_notes_tree();
        self.client
            .parse_get_notes_tree(self.transport.execute(&request)?)
    }

    /// Replace the entire note hierarchy with the supplied forest.
    pub fn update_notes_tree(&self, notes: &[TreeNote]) -> Result<(), ApiError> {
        let request = self.client.build_update_notes_tree(notes)?;
        self.client
            .parse_update_notes_tree(self.transport.execute(&request)?)
    }

    pub fn attach_note_to_parent(
        &self,
        child_note_id: i32,
        parent_note_id: i32,
        hierarchy_type: &str,
    ) -> Result<(), ApiError> {
        let input = AttachNoteRequest {
            child_note_id,
            parent_note_id,
            hierarchy_type: hierarchy_type.to_string(),
        };
        let request = self.client.build_attach_note(&input)?;
        self.client.parse_attach_note(self.transport.execute(&request)?)
    }

    pub fn detach_note_from_parent(&self, note_id: i32) -> Result<(), ApiError> {
        let request = self.client.build_detach_note(note_id);
        self.client.parse_detach_note(self.transport.execute(&request)?)
    }

    pub fn get_note_hierarchy_relations(&self) -> Result<Vec<NoteHierarchyRelation>, ApiError> {
        let request = self.client.build_note_hierarchy_relations();
        self.client
            .parse_note_hierarchy_relations(self.transport.execute(&request)?)
    }

    // -----------------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------------

    pub fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        let input = CreateTagRequest {
            name: name.to_string(),
        };
        let request = self.client.build_create_tag(&input)?;
        self.client.parse_create_tag(self.transport.execute(&request)?)
    }

    pub fn get_tag(&self, tag_id: i32) -> Result<Tag, ApiError> {
        let request = self.client.build_get_tag(tag_id);
        self.client.parse_get_tag(self.transport.execute(&request)?)
    }

    pub fn get_all_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let request = self.client.build_list_tags();
        self.client.parse_list_tags(self.transport.execute(&request)?)
    }

    pub fn update_tag(&self, tag_id: i32, name: &str) -> Result<Tag, ApiError> {
        let input = CreateTagRequest {
            name: name.to_string(),
        };
        let request = self.client.build_update_tag(tag_id, &input)?;
        self.client.parse_update_tag(self.transport.execute(&request)?)
    }

    pub fn delete_tag(&self, tag_id: i32) -> Result<(), ApiError> {
        let request = self.client.build_delete_tag(tag_id);
        self.client.parse_delete_tag(self.transport.execute(&request)?)
    }

    pub fn attach_tag_to_note(&self, note_id: i32, tag_id: i32) -> Result<(), ApiError> {
        let input = AttachTagRequest { note_id, tag_id };
        let request = self.client.build_attach_tag_to_note(&input)?;
        self.client
            .parse_attach_tag_to_note(self.transport.execute(&request)?)
    }

    pub fn detach_tag_from_note(&self, note_id: i32, tag_id: i32) -> Result<(), ApiError> {
        let request = self.client.build_detach_tag_from_note(note_id, tag_id);
        self.client
            .parse_detach_tag_from_note(self.transport.execute(&request)?)
    }

    pub fn get_note_tag_relations(&self) -> Result<Vec<NoteTagRelation>, ApiError> {
        let request = self.client.build_note_tag_relations();
        self.client
            .parse_note_tag_relations(self.transport.execute(&request)?)
    }

    pub fn get_tag_hierarchy_relations(&self) -> Result<Vec<TagHierarchyRelation>, ApiError> {
        let request = self.client.build_tag_hierarchy_relations();
        self.client
            .parse_tag_hierarchy_relations(self.transport.execute(&request)?)
    }

    pub fn attach_tag_to_parent(&self, child_id: i32, parent_id: i32) -> Result<(), ApiError> {
        let input = AttachTagHierarchyRequest {
            parent_id,
            child_id,
        };
        let request = self.client.build_attach_tag_to_parent(&input)?;
        self.client
            .parse_attach_tag_to_parent(self.transport.execute(&request)?)
    }

    pub fn detach_tag_from_parent(&self, tag_id: i32) -> Result<(), ApiError> {
        let request = self.client.build_detach_tag_from_parent(tag_id);
        self.client
            .parse_detach_tag_from_parent(self.transport.execute(&request)?)
    }

    pub fn get_tags_tree(&self) -> Result<Vec<TreeTagWithNotes>, ApiError> {
        let request = self.client.build_get_tags_tree();
        self.client
            .parse_get_tags_tree(self.transport.execute(&request)?)
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    pub fn create_task(&self, input: &CreateTaskRequest) -> Result<Task, ApiError> {
        let request = self.client.build_create_task(input)?;
        self.client.parse_create_task(self.transport.execute(&request)?)
    }

    pub fn get_task(&self, task_id: i32) -> Result<Task, ApiError> {
        let request = self.client.build_get_task(task_id);
        self.client.parse_get_task(self.transport.execute(&request)?)
    }

    pub fn get_all_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let request = self.client.build_list_tasks();
        self.client.parse_list_tasks(self.transport.execute(&request)?)
    }

    pub fn update_task(&self, task_id: i32, input: &UpdateTaskRequest) -> Result<Task, ApiError> {
        let request = self.client.build_update_task(task_id, input)?;
        self.client.parse_update_task(self.transport.execute(&request)?)
    }

    pub fn delete_task(&self, task_id: i32) -> Result<(), ApiError> {
        let request = self.client.build_delete_task(task_id);
        self.client.parse_delete_task(self.transport.execute(&request)?)
    }

    pub fn attach_task_to_parent(&self, child_id: i32, parent_id: i32) -> Result<(), ApiError> {
        let input = AttachTaskRequest {
            child_task_id: child_id,
            parent_task_id: parent_id,
        };
        let request = self.client.build_attach_task(&input)?;
        self.client.parse_attach_task(self.transport.execute(&request)?)
    }

    pub fn detach_task_from_parent(&self, task_id: i32) -> Result<(), ApiError> {
        let request = self.client.build_detach_task(task_id);
        self.client.parse_detach_task(self.transport.execute(&request)?)
    }

    pub fn get_task_hierarchy_relations(&self) -> Result<Vec<TaskHierarchyRelation>, ApiError> {
        let request = self.client.build_task_hierarchy_relations();
        self.client
            .parse_task_hierarchy_relations(self.transport.execute(&request)?)
    }

    pub fn get_tasks_tree(&self) -> Result<Vec<TreeTask>, ApiError> {
        let request = self.client.build_get_tasks_tree();
        self.client
            .parse_get_tasks_tree(self.transport.execute(&request)?)
    }
}

impl Default for Draftsmith {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
