//! HTTP replay server over the in-memory harness.
//!
//! Every request is resolved to a `(Resource, Operation)` pair, its query
//! string or JSON body becomes the call's `Params` (with `id` taken from the
//! path), and the shared `FakeBackend` answers it: queued responses are
//! served as-is, queued failures become a 503 error envelope, and an empty
//! queue serves the fixture payloads.

use axum::{
    body::{Body, Bytes},
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use hcloud_core::params::ID_KEY;
use hcloud_core::{ApiCall, Backend, HttpMethod, HttpResponse, Operation, Params, Resource};
use hcloud_fake::FakeBackend;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, warn};

pub fn app(backend: FakeBackend) -> Router {
    Router::new()
        .route("/{segment}", get(collection).post(collection))
        .route("/{segment}/{id}", get(member).put(member).delete(member))
        .with_state(backend)
}

pub async fn run(listener: TcpListener, backend: FakeBackend) -> Result<(), std::io::Error> {
    axum::serve(listener, app(backend)).await
}

async fn collection(
    State(backend): State<FakeBackend>,
    method: Method,
    Path(segment): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Response {
    replay(&backend, &method, &segment, None, query, &body)
}

async fn member(
    State(backend): State<FakeBackend>,
    method: Method,
    Path((segment, id)): Path<(String, String)>,
    Query(query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Response {
    replay(&backend, &method, &segment, Some(id), query, &body)
}

fn replay(
    backend: &FakeBackend,
    method: &Method,
    segment: &str,
    id: Option<String>,
    query: Vec<(String, String)>,
    body: &[u8],
) -> Response {
    let Some(resource) = Resource::from_path_segment(segment) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "not_found",
            &format!("unknown resource `{segment}`"),
        );
    };
    let operation = to_http_method(method)
        .and_then(|m| Operation::from_route(resource, m, id.is_some()));
    let Some(operation) = operation else {
        return error_response(
            StatusCode::NOT_FOUND,
            "not_found",
            &format!("`{resource}` does not serve {method} here"),
        );
    };

    let mut params = if operation.has_body() {
        match parse_body(body) {
            Ok(params) => params,
            Err(message) => {
                return error_response(StatusCode::BAD_REQUEST, "invalid_input", &message)
            }
        }
    } else {
        Params::from_query_pairs(query)
    };
    if let Some(id) = id {
        params.insert(ID_KEY, id);
    }

    debug!(resource = resource.as_str(), operation = operation.as_str(), "replaying call");
    match backend.dispatch(&ApiCall::new(resource, operation, params)) {
        Ok(response) => into_response(response),
        Err(err) => {
            warn!(%err, "serving queued failure");
            error_response(StatusCode::SERVICE_UNAVAILABLE, "unavailable", &err.to_string())
        }
    }
}

fn to_http_method(method: &Method) -> Option<HttpMethod> {
    match method {
        &Method::GET => Some(HttpMethod::Get),
        &Method::POST => Some(HttpMethod::Post),
        &Method::PUT => Some(HttpMethod::Put),
        &Method::DELETE => Some(HttpMethod::Delete),
        _ => None,
    }
}

fn parse_body(body: &[u8]) -> Result<Params, String> {
    if body.is_empty() {
        return Ok(Params::new());
    }
    serde_json::from_slice(body).map_err(|e| format!("invalid JSON body: {e}"))
}

fn into_response(response: HttpResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
        .body(Body::from(response.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = json!({"error": {"code": code, "message": message}});
    (status, Json(body)).into_response()
}
