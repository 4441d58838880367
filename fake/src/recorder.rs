//! Append-only log of every call made through a fake.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hcloud_core::{Operation, Params, Resource};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Position in the log, starting at 0.
    pub sequence: u64,
    pub resource: Resource,
    pub operation: Operation,
    pub params: Params,
}

impl RecordedCall {
    pub fn resource_name(&self) -> &'static str {
        self.resource.as_str()
    }

    pub fn method(&self) -> &'static str {
        self.operation.as_str()
    }

    pub fn matches(&self, resource: &str, method: &str) -> bool {
        self.resource_name() == resource && self.method() == method
    }
}

/// Clonable handle over a shared call log.
#[derive(Debug, Clone, Default)]
pub struct RequestRecorder {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RequestRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, resource: Resource, operation: Operation, params: Params) -> RecordedCall {
        let mut calls = self.lock();
        let call = RecordedCall {
            sequence: calls.len() as u64,
            resource,
            operation,
            params,
        };
        calls.push(call.clone());
        call
    }

    /// Snapshot of the log in call order.
    pub fn all(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    pub fn for_resource(&self, resource: &str) -> Vec<RecordedCall> {
        self.lock()
            .iter()
            .filter(|c| c.resource_name() == resource)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
