//! Datacenter locations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::{invoke, Backend, Payload};
use crate::endpoint::{Operation, Resource};
use crate::error::ApiResult;
use crate::pagination::{Meta, Paginated};
use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub network_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListLocationsResponse {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub meta: Meta,
}

impl Payload for ListLocationsResponse {}

impl Paginated for ListLocationsResponse {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieveLocationResponse {
    pub location: Location,
}

impl Payload for RetrieveLocationResponse {}

pub struct Locations<B> {
    backend: B,
}

impl<B: Backend> Locations<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Filters: `name`, `sort`, `page`, `per_page`.
    pub fn list(&self, params: Params) -> ApiResult<ListLocationsResponse> {
        invoke(&self.backend, Resource::Locations, Operation::List, params)
    }

    pub fn retrieve(&self, id: impl fmt::Display) -> ApiResult<RetrieveLocationResponse> {
        invoke(&self.backend, Resource::Locations, Operation::Retrieve, Params::for_id(id))
    }
}
