//! Build/parse pairs for the `/tasks` endpoint family.
//!
//! Task payloads carry the only non-trivial local constraints (bounded
//! priority), so `build_create_task` and `build_update_task` validate
//! before serializing; a failed check means no request is built.

use super::{decode, expect_status, DraftsmithClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AttachTaskRequest, CreateTaskRequest, Task, TaskHierarchyRelation, TreeTask,
    UpdateTaskRequest,
};

impl DraftsmithClient {
    pub fn build_create_task(&self, input: &CreateTaskRequest) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        self.with_json(HttpMethod::Post, "/tasks", input)
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        decode(response, 201)
    }

    pub fn build_get_task(&self, id: i32) -> HttpRequest {
        self.get(&format!("/tasks/{id}"))
    }

    pub fn parse_get_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        decode(response, 200)
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        self.get("/tasks")
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        decode(response, 200)
    }

    pub fn build_update_task(
        &self,
        id: i32,
        input: &UpdateTaskRequest,
    ) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        self.with_json(HttpMethod::Put, &format!("/tasks/{id}"), input)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        decode(response, 200)
    }

    pub fn build_delete_task(&self, id: i32) -> HttpRequest {
        self.delete(&format!("/tasks/{id}"))
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_attach_task(&self, input: &AttachTaskRequest) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/tasks/hierarchy/attach", input)
    }

    pub fn parse_attach_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 201)
    }

    pub fn build_detach_task(&self, id: i32) -> HttpRequest {
        self.delete(&format!("/tasks/hierarchy/detach/{id}"))
    }

    pub fn parse_detach_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(response, 204)
    }

    pub fn build_task_hierarchy_relations(&self) -> HttpRequest {
        self.get("/tasks/hierarchy")
    }

    pub fn parse_task_hierarchy_relations(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<TaskHierarchyRelation>, ApiError> {
        decode(response, 200)
    }

    pub fn build_get_tasks_tree(&self) -> HttpRequest {
        self.get("/tasks/tree")
    }

    pub fn parse_get_tasks_tree(&self, response: HttpResponse) -> Result<Vec<TreeTask>, ApiError> {
        decode(response, 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;

    fn client() -> DraftsmithClient {
        DraftsmithClient::new("http://localhost:37240")
    }

    #[test]
    fn build_create_task_serializes_defaults() {
        let input = CreateTaskRequest::default();
        let req = client().build_create_task(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:37240/tasks");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["status"], "todo");
        assert_eq!(body["all_day"], false);
        assert!(body.get("note_id").is_none());
    }

    #[test]
    fn build_create_task_rejects_out_of_range_priority() {
        let input = CreateTaskRequest {
            priority: Some(99),
            ..Default::default()
        };
        let err = client().build_create_task(&input).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn build_update_task_omits_unset_fields() {
        let input = UpdateTaskRequest {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let req = client().build_update_task(8, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:37240/tasks/8");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["status"], "done");
        assert!(body.get("priority").is_none());
        assert!(body.get("all_day").is_none());
    }

    #[test]
    fn build_update_task_rejects_out_of_range_priority() {
        let input = UpdateTaskRequest {
            priority: Some(-3),
            ..Default::default()
        };
        let err = client().build_update_task(8, &input).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn build_attach_task_serializes_ids() {
        let input = AttachTaskRequest {
            child_task_id: 2,
            parent_task_id: 1,
        };
        let req = client().build_attach_task(&input).unwrap();
        assert_eq!(req.url, "http://localhost:37240/tasks/hierarchy/attach");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["child_task_id"], 2);
        assert_eq!(body["parent_task_id"], 1);
    }

    #[test]
    fn parse_create_task_success() {
        let response = HttpResponse {
            status: 201,
            body: r#"{
                "id": 1,
                "note_id": null,
                "status": "todo",
                "effort_estimate": null,
                "actual_effort": null,
                "deadline": null,
                "priority": 5,
                "created_at": "2024-01-15T10:30:00",
                "modified_at": "2024-01-15T10:30:00",
                "all_day": false,
                "goal_relationship": null
            }"#
            .to_string(),
        };
        let task = client().parse_create_task(response).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.priority, Some(5));
    }

    #[test]
    fn parse_get_task_rejects_unknown_status() {
        let response = HttpResponse {
            status: 200,
            body: r#"{
                "id": 1,
                "note_id": null,
                "status": "blocked",
                "effort_estimate": null,
                "actual_effort": null,
                "deadline": null,
                "priority": null,
                "created_at": "2024-01-15T10:30:00",
                "modified_at": "2024-01-15T10:30:00",
                "all_day": false,
                "goal_relationship": null
            }"#
            .to_string(),
        };
        let err = client().parse_get_task(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_delete_task_not_found() {
        let response = HttpResponse {
            status: 404,
            body: String::new(),
        };
        let err = client().parse_delete_task(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_tasks_tree_nests_children() {
        let response = HttpResponse {
            status: 200,
            body: r#"[{
                "id": 1,
                "note_id": null,
                "status": "in_progress",
                "effort_estimate": null,
                "actual_effort": null,
                "deadline": null,
                "priority": null,
                "created_at": "2024-01-15T10:30:00",
                "modified_at": "2024-01-15T10:30:00",
                "all_day": false,
                "goal_relationship": null,
                "children": [{
                    "id": 2,
                    "note_id": null,
                    "status": "todo",
                    "effort_estimate": null,
                    "actual_effort": null,
                    "deadline": null,
                    "priority": null,
                    "created_at": "2024-01-15T10:30:00",
                    "modified_at": "2024-01-15T10:30:00",
                    "all_day": false,
                    "goal_relationship": null
                }]
            }]"#
            .to_string(),
        };
        let tree = client().parse_get_tasks_tree(response).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].status, TaskStatus::InProgress);
        assert_eq!(tree[0].children[0].id, 2);
    }
}
