//! One fake per resource behind a single entry point.

use hcloud_core::Client;

use crate::backend::FakeBackend;
use crate::queue::ResponseQueue;
use crate::recorder::RequestRecorder;
use crate::resource::{
    ActionsFake, BillingFake, IsosFake, LocationsFake, PlacementGroupsFake, ResourceFake,
    ServerTypesFake, SshKeysFake,
};

/// Aggregates the resource fakes. All of them share one queue and one
/// log, so a multi-resource workflow consumes canned responses in the
/// order the test enqueued them and is recorded in call order.
pub struct ClientFake {
    backend: FakeBackend,
    actions: ActionsFake,
    billing: BillingFake,
    isos: IsosFake,
    locations: LocationsFake,
    placement_groups: PlacementGroupsFake,
    server_types: ServerTypesFake,
    ssh_keys: SshKeysFake,
}

impl ClientFake {
    pub fn new() -> Self {
        Self::with_parts(ResponseQueue::new(), RequestRecorder::new())
    }

    pub fn with_queue(queue: ResponseQueue) -> Self {
        Self::with_parts(queue, RequestRecorder::new())
    }

    pub fn with_parts(queue: ResponseQueue, recorder: RequestRecorder) -> Self {
        let backend = FakeBackend::new(queue, recorder);
        Self {
            actions: ResourceFake::new(backend.clone()),
            billing: ResourceFake::new(backend.clone()),
            isos: ResourceFake::new(backend.clone()),
            locations: ResourceFake::new(backend.clone()),
            placement_groups: ResourceFake::new(backend.clone()),
            server_types: ResourceFake::new(backend.clone()),
            ssh_keys: ResourceFake::new(backend.clone()),
            backend,
        }
    }

    pub fn queue(&self) -> &ResponseQueue {
        self.backend.queue()
    }

    pub fn recorder(&self) -> &RequestRecorder {
        self.backend.recorder()
    }

    pub fn backend(&self) -> &FakeBackend {
        &self.backend
    }

    /// A production `Client` wired to this fake's queue and log, for code
    /// under test that takes a `Client<B>`.
    pub fn as_client(&self) -> Client<FakeBackend> {
        Client::with_backend(self.backend.clone())
    }

    pub fn actions(&self) -> &ActionsFake {
        &self.actions
    }

    pub fn billing(&self) -> &BillingFake {
        &self.billing
    }

    pub fn isos(&self) -> &IsosFake {
        &self.isos
    }

    pub fn locations(&self) -> &LocationsFake {
        &self.locations
    }

    pub fn placement_groups(&self) -> &PlacementGroupsFake {
        &self.placement_groups
    }

    pub fn server_types(&self) -> &ServerTypesFake {
        &self.server_types
    }

    pub fn ssh_keys(&self) -> &SshKeysFake {
        &self.ssh_keys
    }
}

impl Default for ClientFake {
    fn default() -> Self {
        Self::new()
    }
}
