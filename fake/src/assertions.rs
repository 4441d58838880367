//! Assertions over a `RequestRecorder` log.
//!
//! Helpers return `Result<(), AssertionError>` so a test can either
//! `unwrap()` them or inspect the failure message.

use hcloud_core::Params;
use thiserror::Error;

use crate::recorder::{RecordedCall, RequestRecorder};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    #[error("expected a `{resource}.{method}` request, but none was made (seen for `{resource}`: {seen})")]
    RequestNotMade {
        resource: String,
        method: String,
        seen: String,
    },

    #[error("expected a `{resource}.{method}` request matching the predicate, but none of {candidates} such request(s) matched")]
    NoMatchingRequest {
        resource: String,
        method: String,
        candidates: usize,
    },

    #[error("expected no requests to `{resource}`, but {count} were made: {calls}")]
    UnexpectedRequests {
        resource: String,
        count: usize,
        calls: String,
    },

    #[error("no request to `{resource}` matched the predicate ({count} request(s) sent)")]
    NotSent { resource: String, count: usize },
}

/// Render calls as `list, retrieve(id=456)`; `none` for an empty list.
pub(crate) fn describe(calls: &[RecordedCall]) -> String {
    if calls.is_empty() {
        return "none".to_string();
    }
    calls
        .iter()
        .map(|call| match call.params.id() {
            Some(id) => format!("{}(id={id})", call.method()),
            None => call.method().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Passes iff some call in `log` targeted `resource` with `method`.
pub fn assert_request_was_made(
    log: &RequestRecorder,
    resource: &str,
    method: &str,
) -> Result<(), AssertionError> {
    let calls = log.for_resource(resource);
    if calls.iter().any(|c| c.method() == method) {
        return Ok(());
    }
    Err(AssertionError::RequestNotMade {
        resource: resource.to_string(),
        method: method.to_string(),
        seen: describe(&calls),
    })
}

/// Like `assert_request_was_made`, additionally requiring `predicate` to
/// hold for the parameters of at least one matching call.
pub fn assert_request_was_made_with(
    log: &RequestRecorder,
    resource: &str,
    method: &str,
    predicate: impl Fn(&Params) -> bool,
) -> Result<(), AssertionError> {
    assert_request_was_made(log, resource, method)?;
    let candidates: Vec<RecordedCall> = log
        .for_resource(resource)
        .into_iter()
        .filter(|c| c.method() == method)
        .collect();
    if candidates.iter().any(|c| predicate(&c.params)) {
        return Ok(());
    }
    Err(AssertionError::NoMatchingRequest {
        resource: resource.to_string(),
        method: method.to_string(),
        candidates: candidates.len(),
    })
}

/// Passes iff no call in `log` targeted `resource`.
pub fn assert_no_request_was_made(
    log: &RequestRecorder,
    resource: &str,
) -> Result<(), AssertionError> {
    let calls = log.for_resource(resource);
    if calls.is_empty() {
        return Ok(());
    }
    Err(AssertionError::UnexpectedRequests {
        resource: resource.to_string(),
        count: calls.len(),
        calls: describe(&calls),
    })
}
