//! Build/parse pairs for the `/tags` endpoint family.

use super::{decode, expect_status, DraftsmithClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AttachTagHierarchyRequest, AttachTagRequest, CreateTagRequest, NoteTagRelation, Tag,
    TagHierarchyRelation, TreeTagWithNotes,
};

impl DraftsmithClient {
    pub fn build_create_tag(&self, input: &CreateTagRequest) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/tags", input)
    }

    pub fn parse_create_tag(&self, response: HttpResponse) -> Result<Tag, ApiError> {
        decode(response, 201)
    }

    pub fn build_get_tag(&self, id: i32) -> HttpRequest {
        self.get(&format!("/tags/{id}"))
    }

    pub fn parse_get_tag(&self, response: HttpResponse) -> Result<Tag, ApiError> {
        decode(response, 200)
    }

    pub fn build_list_tags(&self) -> HttpRequest {
        self.get("/tags")
    }

    pub fn parse_list_tags(&self, response: HttpResponse) -> Result<Vec<Tag>, ApiError> {
        decode(response, 200)
    }

    /// Tag updates reuse the create payload: the name is the only mutable
    /// field.
    pub fn build_update_tag(
        &self,
        id: i32,
        input: &CreateTagRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/tags/{id}"), input)
    }

    pub fn parse_update_tag(&self, response: HttpResponse) -> Result<Tag, ApiError> {
        decode(response, 200)
    }

    pub fn build_delete_tag(&self, id: i32) -> HttpRequest {
        self.delete(&format!("/tags/{id}"))
    }

    pub fn parse_delete_tag(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_attach_tag_to_note(
        &self,
        input: &AttachTagRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/tags/notes", input)
    }

    pub fn parse_attach_tag_to_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 201)
    }

    pub fn build_detach_tag_from_note(&self, note_id: i32, tag_id: i32) -> HttpRequest {
        self.delete(&format!("/tags/notes/{note_id}/{tag_id}"))
    }

    pub fn parse_detach_tag_from_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_note_tag_relations(&self) -> HttpRequest {
        self.get("/tags/notes")
    }

    pub fn parse_note_tag_relations(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<NoteTagRelation>, ApiError> {
        decode(response, 200)
    }

    pub fn build_tag_hierarchy_relations(&self) -> HttpRequest {
        self.get("/tags/hierarchy")
    }

    pub fn parse_tag_hierarchy_relations(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<TagHierarchyRelation>, ApiError> {
        decode(response, 200)
    }

    pub fn build_attach_tag_to_parent(
        &self,
        input: &AttachTagHierarchyRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/tags/hierarchy/attach", input)
    }

    pub fn parse_attach_tag_to_parent(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 201)
    }

    pub fn build_detach_tag_from_parent(&self, id: i32) -> HttpRequest {
        self.delete(&format!("/tags/hierarchy/detach/{id}"))
    }

    pub fn parse_detach_tag_from_parent(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_get_tags_tree(&self) -> HttpRequest {
        self.get("/tags/tree")
    }

    pub fn parse_get_tags_tree(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<TreeTagWithNotes>, ApiError> {
        decode(response, 200)
    }
}
