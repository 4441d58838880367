//! Synchronous typed client for the cloud infrastructure REST API.
//!
//! # Overview
//! One accessor per resource (`actions()`, `billing()`, `isos()`, ...)
//! exposes the server's operations as methods that take a `Params` bag and
//! return a typed response wrapper.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`);
//!   the network round-trip happens behind the `Transport` trait.
//! - Accessors are generic over `Backend`. `HttpBackend` is the production
//!   path; a test harness implements `Backend` to replay canned responses
//!   through exactly the same decoding.
//! - Response wrappers own their entities, implement `Payload` for raw JSON
//!   export, and list wrappers expose pagination through `Paginated`.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod pagination;
pub mod params;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::{decode, decode_empty, Backend, Client, HttpBackend, Payload};
pub use config::ClientConfig;
pub use endpoint::{build_request, ApiCall, Operation, Resource};
pub use error::{ApiError, ApiResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use pagination::{Meta, PageLinks, Paginated, Pagination};
pub use params::{ParamValue, Params};
pub use transport::UreqTransport;
