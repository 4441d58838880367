//! Resource and operation identifiers, and the route table that turns an
//! `ApiCall` into an `HttpRequest`.

use std::fmt;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::params::{Params, ID_KEY};

/// A named group of API entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Actions,
    Billing,
    Isos,
    Locations,
    PlacementGroups,
    ServerTypes,
    SshKeys,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Actions,
        Resource::Billing,
        Resource::Isos,
        Resource::Locations,
        Resource::PlacementGroups,
        Resource::ServerTypes,
        Resource::SshKeys,
    ];

    /// Identifier used in recorded calls and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Actions => "actions",
            Resource::Billing => "billing",
            Resource::Isos => "isos",
            Resource::Locations => "locations",
            Resource::PlacementGroups => "placement_groups",
            Resource::ServerTypes => "server_types",
            Resource::SshKeys => "ssh_keys",
        }
    }

    /// First URL path segment below the base URL.
    pub fn path_segment(self) -> &'static str {
        match self {
            Resource::Billing => "pricing",
            other => other.as_str(),
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path_segment() == segment)
    }

    pub fn supports(self, operation: Operation) -> bool {
        use Operation::*;
        match self {
            Resource::Actions | Resource::Isos | Resource::Locations | Resource::ServerTypes => {
                matches!(operation, List | Retrieve)
            }
            Resource::Billing => operation == ListPricing,
            Resource::PlacementGroups | Resource::SshKeys => {
                matches!(operation, List | Retrieve | Create | Update | Delete)
            }
        }
    }

    /// The collection-level read operation for this resource.
    fn collection_operation(self) -> Operation {
        match self {
            Resource::Billing => Operation::ListPricing,
            _ => Operation::List,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named action on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
    ListPricing,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::List,
        Operation::Retrieve,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::ListPricing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Retrieve => "retrieve",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::ListPricing => "list_pricing",
        }
    }

    pub fn method(self) -> HttpMethod {
        match self {
            Operation::List | Operation::Retrieve | Operation::ListPricing => HttpMethod::Get,
            Operation::Create => HttpMethod::Post,
            Operation::Update => HttpMethod::Put,
            Operation::Delete => HttpMethod::Delete,
        }
    }

    pub fn needs_id(self) -> bool {
        matches!(self, Operation::Retrieve | Operation::Update | Operation::Delete)
    }

    pub fn has_body(self) -> bool {
        matches!(self, Operation::Create | Operation::Update)
    }

    /// Resolve an incoming route back to an operation. Returns `None` when
    /// the resource does not serve that method on that route.
    pub fn from_route(resource: Resource, method: HttpMethod, has_id: bool) -> Option<Self> {
        let operation = match (method, has_id) {
            (HttpMethod::Get, false) => resource.collection_operation(),
            (HttpMethod::Get, true) => Operation::Retrieve,
            (HttpMethod::Post, false) => Operation::Create,
            (HttpMethod::Put, true) => Operation::Update,
            (HttpMethod::Delete, true) => Operation::Delete,
            _ => return None,
        };
        resource.supports(operation).then_some(operation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One invocation of a resource operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub resource: Resource,
    pub operation: Operation,
    pub params: Params,
}

impl ApiCall {
    pub fn new(resource: Resource, operation: Operation, params: Params) -> Self {
        Self {
            resource,
            operation,
            params,
        }
    }
}

/// Build the HTTP request for `call` against `config`.
pub fn build_request(config: &ClientConfig, call: &ApiCall) -> Result<HttpRequest, ApiError> {
    let ApiCall {
        resource,
        operation,
        params,
    } = call;

    if !resource.supports(*operation) {
        return Err(ApiError::UnsupportedOperation {
            resource: resource.to_string(),
            operation: operation.to_string(),
        });
    }

    let mut path = format!("{}/{}", config.base_url, resource.path_segment());
    if operation.needs_id() {
        let id = params
            .id()
            .ok_or_else(|| ApiError::MissingParameter(ID_KEY.to_string()))?;
        path.push('/');
        path.push_str(&id);
    }

    let mut headers = vec![("user-agent".to_string(), config.user_agent.clone())];
    if let Some(token) = &config.token {
        headers.push(("authorization".to_string(), format!("Bearer {token}")));
    }

    let (query, body) = if operation.has_body() {
        headers.push(("content-type".to_string(), "application/json".to_string()));
        let body = serde_json::to_string(&params.body()?)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        (Vec::new(), Some(body))
    } else if operation.needs_id() {
        (Vec::new(), None)
    } else {
        (params.to_query_pairs(), None)
    };

    Ok(HttpRequest {
        method: operation.method(),
        path,
        query,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("http://localhost:3000").with_token("secret")
    }

    #[test]
    fn path_segments_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_path_segment(resource.path_segment()), Some(resource));
        }
        assert_eq!(Resource::from_path_segment("servers"), None);
        assert_eq!(Resource::Billing.path_segment(), "pricing");
    }

    #[test]
    fn list_puts_params_in_query() {
        let call = ApiCall::new(
            Resource::Actions,
            Operation::List,
            Params::new().with("page", 2).with("status", "running"),
        );
        let req = build_request(&config(), &call).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/actions");
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("status".to_string(), "running".to_string()),
            ]
        );
        assert!(req.body.is_none());
        assert_eq!(req.header("authorization"), Some("Bearer secret"));
    }

    #[test]
    fn retrieve_puts_id_in_path() {
        let call = ApiCall::new(Resource::Isos, Operation::Retrieve, Params::for_id(4711));
        let req = build_request(&config(), &call).unwrap();
        assert_eq!(req.path, "http://localhost:3000/isos/4711");
        assert!(req.query.is_empty());
    }

    #[test]
    fn update_sends_body_without_id() {
        let call = ApiCall::new(
            Resource::SshKeys,
            Operation::Update,
            Params::for_id(3).with("name", "laptop"),
        );
        let req = build_request(&config(), &call).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/ssh_keys/3");
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "laptop"}));
    }

    #[test]
    fn missing_id_is_rejected() {
        let call = ApiCall::new(Resource::PlacementGroups, Operation::Delete, Params::new());
        let err = build_request(&config(), &call).unwrap_err();
        assert_eq!(err, ApiError::MissingParameter("id".to_string()));
    }

    #[test]
    fn unsupported_operation_is_rejected() {
        let call = ApiCall::new(Resource::Actions, Operation::Create, Params::new());
        let err = build_request(&config(), &call).unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedOperation { .. }));
    }

    #[test]
    fn routes_resolve_to_operations() {
        use HttpMethod::*;
        assert_eq!(
            Operation::from_route(Resource::Billing, Get, false),
            Some(Operation::ListPricing)
        );
        assert_eq!(Operation::from_route(Resource::SshKeys, Put, true), Some(Operation::Update));
        assert_eq!(Operation::from_route(Resource::Locations, Post, false), None);
        assert_eq!(Operation::from_route(Resource::Actions, Delete, false), None);
    }
}
