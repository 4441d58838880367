//! Per-resource fakes.
//!
//! A `ResourceFake<A>` wraps the real accessor `A` (for example
//! `Actions<FakeBackend>`) and dereferences to it, so tests call exactly the
//! production methods (`list`, `retrieve`, `list_pricing`, ...). On top it
//! adds assertions scoped to its own resource.

use std::ops::Deref;

use hcloud_core::resources::{
    Actions, Billing, Isos, Locations, PlacementGroups, ServerTypes, SshKeys,
};
use hcloud_core::Resource;

use crate::assertions::{describe, AssertionError};
use crate::backend::FakeBackend;
use crate::recorder::{RecordedCall, RequestRecorder};

/// An accessor that can be driven by a `FakeBackend`.
pub trait FakeResource {
    const RESOURCE: Resource;

    fn from_backend(backend: FakeBackend) -> Self;
}

impl FakeResource for Actions<FakeBackend> {
    const RESOURCE: Resource = Resource::Actions;

    fn from_backend(backend: FakeBackend) -> Self {
        Actions::new(backend)
    }
}

impl FakeResource for Billing<FakeBackend> {
    const RESOURCE: Resource = Resource::Billing;

    fn from_backend(backend: FakeBackend) -> Self {
        Billing::new(backend)
    }
}

impl FakeResource for Isos<FakeBackend> {
    const RESOURCE: Resource = Resource::Isos;

    fn from_backend(backend: FakeBackend) -> Self {
        Isos::new(backend)
    }
}

impl FakeResource for Locations<FakeBackend> {
    const RESOURCE: Resource = Resource::Locations;

    fn from_backend(backend: FakeBackend) -> Self {
        Locations::new(backend)
    }
}

impl FakeResource for PlacementGroups<FakeBackend> {
    const RESOURCE: Resource = Resource::PlacementGroups;

    fn from_backend(backend: FakeBackend) -> Self {
        PlacementGroups::new(backend)
    }
}

impl FakeResource for ServerTypes<FakeBackend> {
    const RESOURCE: Resource = Resource::ServerTypes;

    fn from_backend(backend: FakeBackend) -> Self {
        ServerTypes::new(backend)
    }
}

impl FakeResource for SshKeys<FakeBackend> {
    const RESOURCE: Resource = Resource::SshKeys;

    fn from_backend(backend: FakeBackend) -> Self {
        SshKeys::new(backend)
    }
}

pub struct ResourceFake<A> {
    resource: Resource,
    api: A,
    recorder: RequestRecorder,
}

pub type ActionsFake = ResourceFake<Actions<FakeBackend>>;
pub type BillingFake = ResourceFake<Billing<FakeBackend>>;
pub type IsosFake = ResourceFake<Isos<FakeBackend>>;
pub type LocationsFake = ResourceFake<Locations<FakeBackend>>;
pub type PlacementGroupsFake = ResourceFake<PlacementGroups<FakeBackend>>;
pub type ServerTypesFake = ResourceFake<ServerTypes<FakeBackend>>;
pub type SshKeysFake = ResourceFake<SshKeys<FakeBackend>>;

impl<A: FakeResource> ResourceFake<A> {
    pub fn new(backend: FakeBackend) -> Self {
        let recorder = backend.recorder().clone();
        Self {
            resource: A::RESOURCE,
            api: A::from_backend(backend),
            recorder,
        }
    }
}

impl<A> ResourceFake<A> {
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Calls this resource received, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.recorder.for_resource(self.resource.as_str())
    }

    /// Passes iff at least one call to this resource satisfies `predicate`.
    pub fn assert_sent(
        &self,
        predicate: impl Fn(&RecordedCall) -> bool,
    ) -> Result<(), AssertionError> {
        let calls = self.calls();
        if calls.iter().any(predicate) {
            return Ok(());
        }
        Err(AssertionError::NotSent {
            resource: self.resource.to_string(),
            count: calls.len(),
        })
    }

    /// Passes iff this resource received no calls at all.
    pub fn assert_not_sent(&self) -> Result<(), AssertionError> {
        let calls = self.calls();
        if calls.is_empty() {
            return Ok(());
        }
        Err(AssertionError::UnexpectedRequests {
            resource: self.resource.to_string(),
            count: calls.len(),
            calls: describe(&calls),
        })
    }
}

impl<A> Deref for ResourceFake<A> {
    type Target = A;

    fn deref(&self) -> &A {
        &self.api
    }
}
