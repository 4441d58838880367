//! Actions: asynchronous tasks started by other operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::{invoke, Backend, Payload};
use crate::endpoint::{Operation, Resource};
use crate::error::ApiResult;
use crate::pagination::{Meta, Paginated};
use crate::params::Params;
use crate::types::ResourceRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Running,
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    pub command: String,
    pub status: ActionStatus,
    pub progress: u8,
    pub started: String,
    pub finished: Option<String>,
    #[serde(default)]
    pub resources: Vec<ResourceRef>,
    pub error: Option<ActionError>,
}

impl Action {
    pub fn is_finished(&self) -> bool {
        self.status != ActionStatus::Running
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListActionsResponse {
    pub actions: Vec<Action>,
    #[serde(default)]
    pub meta: Meta,
}

impl Payload for ListActionsResponse {}

impl Paginated for ListActionsResponse {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveActionResponse {
    pub action: Action,
}

impl Payload for RetrieveActionResponse {}

pub struct Actions<B> {
    backend: B,
}

impl<B: Backend> Actions<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Filters: `status`, `sort`, `page`, `per_page`.
    pub fn list(&self, params: Params) -> ApiResult<ListActionsResponse> {
        invoke(&self.backend, Resource::Actions, Operation::List, params)
    }

    pub fn retrieve(&self, id: impl fmt::Display) -> ApiResult<RetrieveActionResponse> {
        invoke(&self.backend, Resource::Actions, Operation::Retrieve, Params::for_id(id))
    }
}
