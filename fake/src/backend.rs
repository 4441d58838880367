//! `Backend` implementation that replays the response queue.

use hcloud_core::{ApiCall, ApiError, Backend, HttpResponse};
use tracing::{debug, trace};

use crate::fixtures;
use crate::queue::{QueuedItem, ResponseQueue};
use crate::recorder::RequestRecorder;

/// Records each call, then answers it from the queue (or a fixture once
/// the queue is exhausted). Clones share the same queue and log.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    queue: ResponseQueue,
    recorder: RequestRecorder,
}

impl FakeBackend {
    pub fn new(queue: ResponseQueue, recorder: RequestRecorder) -> Self {
        Self { queue, recorder }
    }

    pub fn queue(&self) -> &ResponseQueue {
        &self.queue
    }

    pub fn recorder(&self) -> &RequestRecorder {
        &self.recorder
    }
}

impl Backend for FakeBackend {
    fn dispatch(&self, call: &ApiCall) -> Result<HttpResponse, ApiError> {
        // Record before consuming so failed calls still show up in the log.
        let recorded = self
            .recorder
            .record(call.resource, call.operation, call.params.clone());
        trace!(
            sequence = recorded.sequence,
            resource = recorded.resource_name(),
            operation = recorded.method(),
            "recorded call"
        );

        match self.queue.pop() {
            Some(QueuedItem::Success(response)) => {
                debug!(status = response.status, "replaying queued response");
                Ok(response)
            }
            Some(QueuedItem::Failure(error)) => {
                debug!(%error, "replaying queued failure");
                Err(error)
            }
            None => {
                debug!(
                    resource = call.resource.as_str(),
                    operation = call.operation.as_str(),
                    "response queue empty, synthesizing default payload"
                );
                fixtures::default_response(call)
            }
        }
    }
}
