//! FIFO queue of canned responses.
//!
//! # Design
//! `ResponseQueue` is a cheap clonable handle; every clone sees the same
//! items, so one queue can be shared by all resource fakes of a client fake
//! (and by the replay server's handlers). An empty queue is not an error:
//! `pop` returns `None` and the consumer synthesizes a default response.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hcloud_core::{ApiError, HttpResponse};

/// One pre-seeded outcome for the next call.
#[derive(Debug, Clone, PartialEq)]
pub enum QueuedItem {
    /// A response handed to the typed decoding layer as if it came from
    /// the server.
    Success(HttpResponse),
    /// An error returned verbatim to the caller.
    Failure(ApiError),
}

impl QueuedItem {
    /// A 200 JSON response.
    pub fn json(value: serde_json::Value) -> Self {
        Self::json_with_status(200, value)
    }

    pub fn json_with_status(status: u16, value: serde_json::Value) -> Self {
        QueuedItem::Success(HttpResponse::json(status, &value))
    }

    /// A response with an arbitrary, possibly malformed, body.
    pub fn raw(status: u16, body: &str) -> Self {
        QueuedItem::Success(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    /// A provider error envelope with the given status.
    pub fn api_error(status: u16, code: &str, message: &str) -> Self {
        Self::json_with_status(
            status,
            serde_json::json!({"error": {"code": code, "message": message}}),
        )
    }

    pub fn failure(error: ApiError) -> Self {
        QueuedItem::Failure(error)
    }

    /// A failure that never reached the server, e.g. "Network timeout".
    pub fn transport_failure(message: &str) -> Self {
        QueuedItem::Failure(ApiError::transport(message))
    }
}

impl From<HttpResponse> for QueuedItem {
    fn from(response: HttpResponse) -> Self {
        QueuedItem::Success(response)
    }
}

impl From<ApiError> for QueuedItem {
    fn from(error: ApiError) -> Self {
        QueuedItem::Failure(error)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseQueue {
    items: Arc<Mutex<VecDeque<QueuedItem>>>,
}

impl ResponseQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = QueuedItem>) -> Self {
        items.into_iter().collect()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<QueuedItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, item: impl Into<QueuedItem>) {
        self.lock().push_back(item.into());
    }

    /// Remove the earliest-inserted item. `None` means nothing was seeded.
    pub fn pop(&self) -> Option<QueuedItem> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl FromIterator<QueuedItem> for ResponseQueue {
    fn from_iter<I: IntoIterator<Item = QueuedItem>>(iter: I) -> Self {
        Self {
            items: Arc::new(Mutex::new(iter.into_iter().collect())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pops_in_insertion_order() {
        let queue = ResponseQueue::from_items([
            QueuedItem::json(json!({"n": 1})),
            QueuedItem::transport_failure("boom"),
            QueuedItem::json(json!({"n": 3})),
        ]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(QueuedItem::json(json!({"n": 1}))));
        assert_eq!(queue.pop(), Some(QueuedItem::transport_failure("boom")));
        assert_eq!(queue.pop(), Some(QueuedItem::json(json!({"n": 3}))));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn clones_share_items() {
        let queue = ResponseQueue::new();
        let handle = queue.clone();
        handle.push(QueuedItem::json(json!({})));
        assert_eq!(queue.len(), 1);
        assert!(queue.pop().is_some());
        assert!(handle.is_empty());
    }

    #[test]
    fn api_error_builds_envelope() {
        let QueuedItem::Success(response) = QueuedItem::api_error(409, "conflict", "locked") else {
            panic!("expected a success item");
        };
        assert_eq!(response.status, 409);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"]["code"], "conflict");
    }
}
