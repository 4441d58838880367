//! Placement groups: control how servers are spread across hosts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::{invoke, invoke_empty, Backend, Payload};
use crate::endpoint::{Operation, Resource};
use crate::error::ApiResult;
use crate::pagination::{Meta, Paginated};
use crate::params::{Params, ID_KEY};
use crate::resources::actions::Action;
use crate::types::Labels;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementGroup {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(rename = "type")]
    pub kind: String,
    pub created: String,
    #[serde(default)]
    pub servers: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPlacementGroupsResponse {
    pub placement_groups: Vec<PlacementGroup>,
    #[serde(default)]
    pub meta: Meta,
}

impl Payload for ListPlacementGroupsResponse {}

impl Paginated for ListPlacementGroupsResponse {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievePlacementGroupResponse {
    pub placement_group: PlacementGroup,
}

impl Payload for RetrievePlacementGroupResponse {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlacementGroupResponse {
    pub placement_group: PlacementGroup,
    #[serde(default)]
    pub action: Option<Action>,
}

impl Payload for CreatePlacementGroupResponse {}

pub type UpdatePlacementGroupResponse = RetrievePlacementGroupResponse;

pub struct PlacementGroups<B> {
    backend: B,
}

impl<B: Backend> PlacementGroups<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Filters: `name`, `type`, `label_selector`, `sort`, `page`, `per_page`.
    pub fn list(&self, params: Params) -> ApiResult<ListPlacementGroupsResponse> {
        invoke(&self.backend, Resource::PlacementGroups, Operation::List, params)
    }

    pub fn retrieve(&self, id: impl fmt::Display) -> ApiResult<RetrievePlacementGroupResponse> {
        invoke(
            &self.backend,
            Resource::PlacementGroups,
            Operation::Retrieve,
            Params::for_id(id),
        )
    }

    /// Payload keys: `name`, `type`, `labels`.
    pub fn create(&self, params: Params) -> ApiResult<CreatePlacementGroupResponse> {
        invoke(&self.backend, Resource::PlacementGroups, Operation::Create, params)
    }

    /// Payload keys: `name`, `labels`.
    pub fn update(
        &self,
        id: impl fmt::Display,
        params: Params,
    ) -> ApiResult<UpdatePlacementGroupResponse> {
        let params = params.with(ID_KEY, id.to_string());
        invoke(&self.backend, Resource::PlacementGroups, Operation::Update, params)
    }

    pub fn delete(&self, id: impl fmt::Display) -> ApiResult<()> {
        invoke_empty(
            &self.backend,
            Resource::PlacementGroups,
            Operation::Delete,
            Params::for_id(id),
        )
    }
}
