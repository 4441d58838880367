use axum::http::{self, Request, StatusCode};
use hcloud_fake::{
    assert_no_request_was_made, assert_request_was_made, assert_request_was_made_with,
    FakeBackend, QueuedItem,
};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_actions_serves_default_payload() {
    let backend = FakeBackend::default();
    let resp = app(backend.clone()).oneshot(get("/actions")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["actions"].as_array().unwrap().len(), 3);
    assert_request_was_made(backend.recorder(), "actions", "list").unwrap();
}

#[tokio::test]
async fn pricing_route_maps_to_billing() {
    let backend = FakeBackend::default();
    let resp = app(backend.clone()).oneshot(get("/pricing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["pricing"]["currency"], "EUR");
    assert_request_was_made(backend.recorder(), "billing", "list_pricing").unwrap();
}

// ---------------------------------------------------------------------------
// Params
// ---------------------------------------------------------------------------

#[tokio::test]
async fn query_string_becomes_params() {
    let backend = FakeBackend::default();
    app(backend.clone())
        .oneshot(get("/ssh_keys?page=2&name=laptop&per_page=5"))
        .await
        .unwrap();

    assert_request_was_made_with(backend.recorder(), "ssh_keys", "list", |p| {
        p.get("page").and_then(|v| v.as_i64()) == Some(2)
            && p.get("name").and_then(|v| v.as_str()) == Some("laptop")
    })
    .unwrap();
}

#[tokio::test]
async fn query_values_keep_their_exact_text() {
    let backend = FakeBackend::default();
    app(backend.clone())
        .oneshot(get("/isos?name=007&sort=%2B5&per_page=10"))
        .await
        .unwrap();

    assert_request_was_made_with(backend.recorder(), "isos", "list", |p| {
        p.get("name").and_then(|v| v.as_str()) == Some("007")
            && p.get("sort").and_then(|v| v.as_str()) == Some("+5")
            && p.get("per_page").and_then(|v| v.as_i64()) == Some(10)
    })
    .unwrap();
}

#[tokio::test]
async fn path_id_and_body_become_params() {
    let backend = FakeBackend::default();
    let resp = app(backend.clone())
        .oneshot(json_request(
            "PUT",
            "/placement_groups/897",
            r#"{"name":"renamed","labels":{"tier":"db"}}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["placement_group"]["name"], "renamed");
    assert_eq!(body["placement_group"]["labels"], json!({"tier": "db"}));

    let calls = backend.recorder().all();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].params.id().as_deref(), Some("897"));
}

#[tokio::test]
async fn malformed_body_returns_400_without_recording() {
    let backend = FakeBackend::default();
    let resp = app(backend.clone())
        .oneshot(json_request("POST", "/ssh_keys", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "invalid_input");
    assert!(backend.recorder().is_empty());
}

// ---------------------------------------------------------------------------
// Queued items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn queued_response_is_served_verbatim() {
    let backend = FakeBackend::default();
    backend
        .queue()
        .push(QueuedItem::api_error(422, "invalid_input", "name is already used"));

    let resp = app(backend.clone())
        .oneshot(json_request("POST", "/ssh_keys", r#"{"name":"dup"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["message"], "name is already used");
}

#[tokio::test]
async fn queued_failure_becomes_503_envelope() {
    let backend = FakeBackend::default();
    backend.queue().push(QueuedItem::transport_failure("Network timeout"));

    let resp = app(backend.clone()).oneshot(get("/locations/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "unavailable");
    assert_eq!(body["error"]["message"], "Network timeout");
    assert_request_was_made(backend.recorder(), "locations", "retrieve").unwrap();
}

#[tokio::test]
async fn delete_serves_empty_204() {
    let backend = FakeBackend::default();
    let resp = app(backend.clone())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/ssh_keys/2323")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_resource_returns_404() {
    let backend = FakeBackend::default();
    let resp = app(backend.clone()).oneshot(get("/servers")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "not_found");
    assert!(backend.recorder().is_empty());
}

#[tokio::test]
async fn unsupported_operation_returns_404() {
    let backend = FakeBackend::default();
    let resp = app(backend.clone())
        .oneshot(json_request("POST", "/actions", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_no_request_was_made(backend.recorder(), "actions").unwrap();
}

// ---------------------------------------------------------------------------
// Shared state across requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn queue_is_shared_across_requests() {
    use tower::Service;

    let backend = FakeBackend::default();
    backend.queue().push(QueuedItem::json(json!({
        "isos": [],
        "meta": {"pagination": {
            "page": 1, "per_page": 25, "previous_page": null,
            "next_page": null, "last_page": 1, "total_entries": 0
        }}
    })));
    let mut app = app(backend.clone()).into_service();

    // seeded
    let resp = ServiceExt::<Request<String>>::ready(&mut app)
        .await
        .unwrap()
        .call(get("/isos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["isos"].as_array().unwrap().is_empty());

    // queue exhausted — fixture
    let resp = ServiceExt::<Request<String>>::ready(&mut app)
        .await
        .unwrap()
        .call(get("/isos"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["isos"].as_array().unwrap().len(), 1);

    let calls = backend.recorder().all();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].sequence, 1);
}
