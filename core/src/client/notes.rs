//! Build/parse pairs for the `/notes` endpoint family.

use super::{decode, expect_status, DraftsmithClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AttachNoteRequest, CreateNoteRequest, Note, NoteHierarchyRelation, NoteWithoutContent,
    TreeNote, UpdateNoteRequest,
};

impl DraftsmithClient {
    pub fn build_create_note(&self, input: &CreateNoteRequest) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/notes/flat", input)
    }

    pub fn parse_create_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        decode(response, 201)
    }

    pub fn build_get_note(&self, id: i32) -> HttpRequest {
        self.get(&format!("/notes/flat/{id}"))
    }

    pub fn parse_get_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        decode(response, 200)
    }

    pub fn build_get_note_without_content(&self, id: i32) -> HttpRequest {
        self.get(&format!("/notes/flat/{id}?exclude_content=true"))
    }

    pub fn parse_get_note_without_content(
        &self,
        response: HttpResponse,
    ) -> Result<NoteWithoutContent, ApiError> {
        decode(response, 200)
    }

    pub fn build_list_notes(&self) -> HttpRequest {
        self.get("/notes/flat")
    }

    pub fn parse_list_notes(&self, response: HttpResponse) -> Result<Vec<Note>, ApiError> {
        decode(response, 200)
    }

    pub fn build_list_notes_without_content(&self) -> HttpRequest {
        self.get("/notes/flat?exclude_content=true")
    }

    pub fn parse_list_notes_without_content(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<NoteWithoutContent>, ApiError> {
        decode(response, 200)
    }

    pub fn build_update_note(
        &self,
        id: i32,
        input: &UpdateNoteRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/notes/flat/{id}"), input)
    }

    pub fn parse_update_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        decode(response, 200)
    }

    pub fn build_delete_note(&self, id: i32) -> HttpRequest {
        self.delete(&format!("/notes/flat/{id}"))
    }

    pub fn parse_delete_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_get_notes_tree(&self) -> HttpRequest {
        self.get("/notes/tree")
    }

    pub fn parse_get_notes_tree(&self, response: HttpResponse) -> Result<Vec<TreeNote>, ApiError> {
        decode(response, 200)
    }

    /// Replace the entire note hierarchy with the supplied forest.
    pub fn build_update_notes_tree(&self, notes: &[TreeNote]) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, "/notes/tree", &notes)
    }

    pub fn parse_update_notes_tree(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_attach_note(&self, input: &AttachNoteRequest) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/notes/hierarchy/attach", input)
    }

    pub fn parse_attach_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 201)
    }

    pub fn build_detach_note(&self, id: i32) -> HttpRequest {
        self.delete(&format!("/notes/hierarchy/detach/{id}"))
    }

    pub fn parse_detach_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_note_hierarchy_relations(&self) -> HttpRequest {
        self.get("/notes/hierarchy")
    }

    pub fn parse_note_hierarchy_relations(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<NoteHierarchyRelation>, ApiError> {
        decode(response, 200)
    }
}
