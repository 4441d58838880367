//! ISO images that can be attached to servers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::{invoke, Backend, Payload};
use crate::endpoint::{Operation, Resource};
use crate::error::ApiResult;
use crate::pagination::{Meta, Paginated};
use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso {
    pub id: u64,
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub deprecated: Option<String>,
    pub architecture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListIsosResponse {
    pub isos: Vec<Iso>,
    #[serde(default)]
    pub meta: Meta,
}

impl Payload for ListIsosResponse {}

impl Paginated for ListIsosResponse {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveIsoResponse {
    pub iso: Iso,
}

impl Payload for RetrieveIsoResponse {}

pub struct Isos<B> {
    backend: B,
}

impl<B: Backend> Isos<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Filters: `name`, `architecture`, `include_architecture_wildcard`,
    /// `page`, `per_page`.
    pub fn list(&self, params: Params) -> ApiResult<ListIsosResponse> {
        invoke(&self.backend, Resource::Isos, Operation::List, params)
    }

    pub fn retrieve(&self, id: impl fmt::Display) -> ApiResult<RetrieveIsoResponse> {
        invoke(&self.backend, Resource::Isos, Operation::Retrieve, Params::for_id(id))
    }
}
