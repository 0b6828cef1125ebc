use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Note, Tag, Task};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- notes: flat ---

#[tokio::test]
async fn list_notes_empty() {
    let resp = app().oneshot(get_request("/notes/flat")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let notes: Vec<Note> = body_json(resp).await;
    assert!(notes.is_empty());
}

#[tokio::test]
async fn create_note_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/notes/flat",
            r#"{"title":"Meeting Notes","content":"agenda"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let note: Note = body_json(resp).await;
    assert_eq!(note.id, 1);
    assert_eq!(note.title, "Meeting Notes");
    assert_eq!(note.content, "agenda");
}

#[tokio::test]
async fn create_note_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/notes/flat", r#"{"title":1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_note_not_found() {
    let resp = app().oneshot(get_request("/notes/flat/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_note_bad_id_returns_400() {
    let resp = app()
        .oneshot(get_request("/notes/flat/not-a-number"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exclude_content_drops_the_field() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/notes/flat",
            r#"{"title":"T","content":"secret"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/notes/flat/1?exclude_content=true"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let note: Value = body_json(resp).await;
    assert_eq!(note["title"], "T");
    assert!(note.get("content").is_none());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/notes/flat?exclude_content=true"))
        .await
        .unwrap();
    let notes: Vec<Value> = body_json(resp).await;
    assert!(notes[0].get("content").is_none());
}

#[tokio::test]
async fn note_update_delete_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/notes/flat",
            r#"{"title":"Draft","content":"v1"}"#,
        ))
        .await
        .unwrap();
    let created: Note = body_json(resp).await;

    // partial update: only content
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/notes/flat/{}", created.id),
            r#"{"content":"v2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Note = body_json(resp).await;
    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.content, "v2");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(format!("/notes/flat/{}", created.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/notes/flat/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- notes: hierarchy and tree ---

#[tokio::test]
async fn notes_tree_nests_three_levels() {
    use tower::Service;

    let mut app = app().into_service();

    for title in ["Root", "Mid", "Leaf"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/notes/flat",
                &format!(r#"{{"title":"{title}","content":""}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    for (child, parent) in [(2, 1), (3, 2)] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/notes/hierarchy/attach",
                &format!(r#"{{"child_note_id":{child},"parent_note_id":{parent}}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/notes/tree"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let tree: Vec<Value> = body_json(resp).await;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["id"], 1);
    assert_eq!(tree[0]["children"][0]["id"], 2);
    assert_eq!(tree[0]["children"][0]["hierarchy_type"], "block");
    assert_eq!(tree[0]["children"][0]["children"][0]["id"], 3);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/notes/hierarchy"))
        .await
        .unwrap();
    let relations: Vec<Value> = body_json(resp).await;
    assert_eq!(relations.len(), 2);

    // detach the middle note; it becomes a root with its own subtree
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/notes/hierarchy/detach/2")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/notes/tree"))
        .await
        .unwrap();
    let tree: Vec<Value> = body_json(resp).await;
    assert_eq!(tree.len(), 2);
}

#[tokio::test]
async fn attach_note_unknown_id_returns_404() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/notes/hierarchy/attach",
            r#"{"child_note_id":1,"parent_note_id":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detach_note_without_parent_returns_404() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/notes/hierarchy/detach/1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replace_notes_tree_rebuilds_links() {
    use tower::Service;

    let mut app = app().into_service();

    for title in ["A", "B"] {
        ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/notes/flat",
                &format!(r#"{{"title":"{title}","content":""}}"#),
            ))
            .await
            .unwrap();
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            "/notes/tree",
            r#"[{"id":1,"title":"A","children":[{"id":2,"title":"B renamed"}]}]"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/notes/tree"))
        .await
        .unwrap();
    let tree: Vec<Value> = body_json(resp).await;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["children"][0]["title"], "B renamed");

    // unknown id in the forest leaves nothing half-applied
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            "/notes/tree",
            r#"[{"id":99,"title":"ghost"}]"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- tags ---

#[tokio::test]
async fn create_tag_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/tags", r#"{"name":"projects"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tag: Tag = body_json(resp).await;
    assert_eq!(tag.id, 1);
    assert_eq!(tag.name, "projects");
}

#[tokio::test]
async fn tag_note_association_and_tree() {
    use tower::Service;

    let mut app = app().into_service();

    ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/notes/flat",
            r#"{"title":"Tagged","content":""}"#,
        ))
        .await
        .unwrap();
    for name in ["root-tag", "child-tag"] {
        ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/tags",
                &format!(r#"{{"name":"{name}"}}"#),
            ))
            .await
            .unwrap();
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/tags/hierarchy/attach",
            r#"{"parent_id":1,"child_id":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/tags/notes",
            r#"{"note_id":1,"tag_id":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/tags/tree"))
        .await
        .unwrap();
    let tree: Vec<Value> = body_json(resp).await;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["name"], "root-tag");
    assert_eq!(tree[0]["children"][0]["name"], "child-tag");
    assert_eq!(tree[0]["children"][0]["notes"][0]["id"], 1);

    // the note's tree view lists the attached tag
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/notes/tree"))
        .await
        .unwrap();
    let notes: Vec<Value> = body_json(resp).await;
    assert_eq!(notes[0]["tags"][0]["name"], "child-tag");

    // detach the association
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/tags/notes/1/2")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/tags/notes"))
        .await
        .unwrap();
    let relations: Vec<Value> = body_json(resp).await;
    assert!(relations.is_empty());
}

#[tokio::test]
async fn update_tag_renames() {
    use tower::Service;

    let mut app = app().into_service();

    ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/tags", r#"{"name":"old"}"#))
        .await
        .unwrap();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", "/tags/1", r#"{"name":"new"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let tag: Tag = body_json(resp).await;
    assert_eq!(tag.name, "new");
}

// --- tasks ---

#[tokio::test]
async fn create_task_applies_defaults() {
    let resp = app()
        .oneshot(json_request("POST", "/tasks", r#"{}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let task: Task = body_json(resp).await;
    assert_eq!(task.id, 1);
    assert_eq!(task.status, mock_server::TaskStatus::Todo);
    assert!(!task.all_day);
    assert!(task.note_id.is_none());
}

#[tokio::test]
async fn create_task_unknown_status_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/tasks", r#"{"status":"blocked"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_task_unknown_note_returns_404() {
    let resp = app()
        .oneshot(json_request("POST", "/tasks", r#"{"note_id":42}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn task_update_and_tree() {
    use tower::Service;

    let mut app = app().into_service();

    for _ in 0..2 {
        ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/tasks", r#"{"priority":3}"#))
            .await
            .unwrap();
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            "/tasks/1",
            r#"{"status":"in_progress","effort_estimate":2.5}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let task: Task = body_json(resp).await;
    assert_eq!(task.status, mock_server::TaskStatus::InProgress);
    assert_eq!(task.effort_estimate, Some(2.5));
    assert_eq!(task.priority, Some(3)); // unchanged

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/tasks/hierarchy/attach",
            r#"{"child_task_id":2,"parent_task_id":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/tasks/tree"))
        .await
        .unwrap();
    let tree: Vec<Value> = body_json(resp).await;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["id"], 1);
    assert_eq!(tree[0]["children"][0]["id"], 2);
}
