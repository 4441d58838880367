//! Server types: the hardware plans servers are created with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::{invoke, Backend, Payload};
use crate::endpoint::{Operation, Resource};
use crate::error::ApiResult;
use crate::pagination::{Meta, Paginated};
use crate::params::Params;
use crate::types::LocationPrice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerType {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub cores: u32,
    /// GB of RAM.
    pub memory: f64,
    /// GB of local disk.
    pub disk: u64,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub prices: Vec<LocationPrice>,
    pub storage_type: String,
    pub cpu_type: String,
    pub architecture: Option<String>,
}

impl ServerType {
    pub fn price_in(&self, location: &str) -> Option<&LocationPrice> {
        self.prices.iter().find(|p| p.location == location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListServerTypesResponse {
    pub server_types: Vec<ServerType>,
    #[serde(default)]
    pub meta: Meta,
}

impl Payload for ListServerTypesResponse {}

impl Paginated for ListServerTypesResponse {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieveServerTypeResponse {
    pub server_type: ServerType,
}

impl Payload for RetrieveServerTypeResponse {}

pub struct ServerTypes<B> {
    backend: B,
}

impl<B: Backend> ServerTypes<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Filters: `name`, `page`, `per_page`.
    pub fn list(&self, params: Params) -> ApiResult<ListServerTypesResponse> {
        invoke(&self.backend, Resource::ServerTypes, Operation::List, params)
    }

    pub fn retrieve(&self, id: impl fmt::Display) -> ApiResult<RetrieveServerTypeResponse> {
        invoke(&self.backend, Resource::ServerTypes, Operation::Retrieve, Params::for_id(id))
    }
}
