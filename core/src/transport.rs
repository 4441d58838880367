//! Blocking production transport over `ureq`.
//!
//! # Design
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as data and the response layer interprets them.
//! Only failures that produced no response map to `ApiError::Transport`.

use tracing::trace;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

fn decorate<B>(builder: ureq::RequestBuilder<B>, req: &HttpRequest) -> ureq::RequestBuilder<B> {
    let mut builder = builder.query_pairs(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        trace!(method = req.method.as_str(), path = %req.path, "executing request");

        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => decorate(self.agent.get(&req.path), &req).call(),
            (HttpMethod::Delete, _) => decorate(self.agent.delete(&req.path), &req).call(),
            (HttpMethod::Post, Some(body)) => {
                decorate(self.agent.post(&req.path), &req).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => decorate(self.agent.post(&req.path), &req).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                decorate(self.agent.put(&req.path), &req).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => decorate(self.agent.put(&req.path), &req).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
