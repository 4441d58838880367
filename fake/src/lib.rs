//! In-memory replay harness for the cloud API client.
//!
//! # Overview
//! Tests seed a `ResponseQueue` with canned responses and failures, build a
//! `ClientFake` (or a single `ResourceFake`) over it, call the production
//! accessor methods, and then assert against the shared `RequestRecorder`.
//!
//! # Design
//! - `FakeBackend` implements the client's `Backend` seam, so responses go
//!   through the same typed decoding as real HTTP responses.
//! - Every call is recorded before the queue is consumed.
//! - Queued failures are returned verbatim; an empty queue yields a fixed
//!   example payload from `fixtures` instead of an error. A test that
//!   forgets to seed its responses therefore runs against fixture data;
//!   assert on the recorder to catch that.

pub mod assertions;
pub mod backend;
pub mod client;
pub mod fixtures;
pub mod queue;
pub mod recorder;
pub mod resource;

pub use assertions::{
    assert_no_request_was_made, assert_request_was_made, assert_request_was_made_with,
    AssertionError,
};
pub use backend::FakeBackend;
pub use client::ClientFake;
pub use queue::{QueuedItem, ResponseQueue};
pub use recorder::{RecordedCall, RequestRecorder};
pub use resource::{
    ActionsFake, BillingFake, FakeResource, IsosFake, LocationsFake, PlacementGroupsFake,
    ResourceFake, ServerTypesFake, SshKeysFake,
};
