//! SSH public keys injected into new servers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::{invoke, invoke_empty, Backend, Payload};
use crate::endpoint::{Operation, Resource};
use crate::error::ApiResult;
use crate::pagination::{Meta, Paginated};
use crate::params::{Params, ID_KEY};
use crate::types::Labels;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub name: String,
    pub fingerprint: String,
    pub public_key: String,
    #[serde(default)]
    pub labels: Labels,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSshKeysResponse {
    pub ssh_keys: Vec<SshKey>,
    #[serde(default)]
    pub meta: Meta,
}

impl Payload for ListSshKeysResponse {}

impl Paginated for ListSshKeysResponse {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveSshKeyResponse {
    pub ssh_key: SshKey,
}

impl Payload for RetrieveSshKeyResponse {}

pub type CreateSshKeyResponse = RetrieveSshKeyResponse;
pub type UpdateSshKeyResponse = RetrieveSshKeyResponse;

pub struct SshKeys<B> {
    backend: B,
}

impl<B: Backend> SshKeys<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Filters: `name`, `fingerprint`, `label_selector`, `sort`, `page`, `per_page`.
    pub fn list(&self, params: Params) -> ApiResult<ListSshKeysResponse> {
        invoke(&self.backend, Resource::SshKeys, Operation::List, params)
    }

    pub fn retrieve(&self, id: impl fmt::Display) -> ApiResult<RetrieveSshKeyResponse> {
        invoke(&self.backend, Resource::SshKeys, Operation::Retrieve, Params::for_id(id))
    }

    /// Payload keys: `name`, `public_key`, `labels`.
    pub fn create(&self, params: Params) -> ApiResult<CreateSshKeyResponse> {
        invoke(&self.backend, Resource::SshKeys, Operation::Create, params)
    }

    /// Payload keys: `name`, `labels`.
    pub fn update(&self, id: impl fmt::Display, params: Params) -> ApiResult<UpdateSshKeyResponse> {
        let params = params.with(ID_KEY, id.to_string());
        invoke(&self.backend, Resource::SshKeys, Operation::Update, params)
    }

    pub fn delete(&self, id: impl fmt::Display) -> ApiResult<()> {
        invoke_empty(&self.backend, Resource::SshKeys, Operation::Delete, Params::for_id(id))
    }
}
