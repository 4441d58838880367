//! Dispatch and typed response decoding.
//!
//! # Design
//! Every resource operation goes through a `Backend`: the accessor turns its
//! arguments into an `ApiCall`, the backend produces an `HttpResponse` (or an
//! error), and `decode` turns that response into the operation's typed
//! wrapper. The production `HttpBackend` builds a request from the endpoint
//! table and hands it to a `Transport`; test harnesses implement `Backend`
//! directly and feed canned responses through the same decoding path.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoint::{build_request, ApiCall, Operation, Resource};
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpResponse, Transport};
use crate::params::Params;
use crate::resources::{
    Actions, Billing, Isos, Locations, PlacementGroups, ServerTypes, SshKeys,
};
use crate::transport::UreqTransport;

/// Produces the response for one `ApiCall`.
pub trait Backend {
    fn dispatch(&self, call: &ApiCall) -> Result<HttpResponse, ApiError>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn dispatch(&self, call: &ApiCall) -> Result<HttpResponse, ApiError> {
        (**self).dispatch(call)
    }
}

/// Backend that performs real HTTP round-trips through a `Transport`.
#[derive(Debug)]
pub struct HttpBackend<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> HttpBackend<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl<T: Transport> Backend for HttpBackend<T> {
    fn dispatch(&self, call: &ApiCall) -> Result<HttpResponse, ApiError> {
        let request = build_request(&self.config, call)?;
        debug!(
            resource = call.resource.as_str(),
            operation = call.operation.as_str(),
            method = request.method.as_str(),
            path = %request.path,
            "dispatching request"
        );
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

/// A typed response wrapper that can be built from, and exported to, the
/// raw JSON structure.
pub trait Payload: Serialize + DeserializeOwned {
    fn from_value(value: serde_json::Value) -> ApiResult<Self> {
        serde_json::from_value(value).map_err(ApiError::from)
    }

    /// Raw-map export of the wrapper.
    fn to_value(&self) -> ApiResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| ApiError::Serialization(e.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Map non-success status codes to the appropriate `ApiError` variant.
/// Any 2xx status is accepted.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => ("unknown".to_string(), response.body.clone()),
    };
    Err(ApiError::Http {
        status: response.status,
        code,
        message,
        body: response.body.clone(),
    })
}

/// Decode a response body into the wrapper `R`.
pub fn decode<R: Payload>(response: HttpResponse) -> ApiResult<R> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(ApiError::from)
}

/// Accept a response whose body is irrelevant (deletes).
pub fn decode_empty(response: HttpResponse) -> ApiResult<()> {
    check_status(&response)
}

pub(crate) fn invoke<B: Backend, R: Payload>(
    backend: &B,
    resource: Resource,
    operation: Operation,
    params: Params,
) -> ApiResult<R> {
    let response = backend.dispatch(&ApiCall::new(resource, operation, params))?;
    decode(response)
}

pub(crate) fn invoke_empty<B: Backend>(
    backend: &B,
    resource: Resource,
    operation: Operation,
    params: Params,
) -> ApiResult<()> {
    let response = backend.dispatch(&ApiCall::new(resource, operation, params))?;
    decode_empty(response)
}

/// Entry point exposing one accessor per resource.
#[derive(Debug)]
pub struct Client<B> {
    backend: B,
}

impl Client<HttpBackend<UreqTransport>> {
    /// Production client over a blocking ureq transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_backend(HttpBackend::new(config, UreqTransport::new()))
    }

    pub fn from_env() -> ApiResult<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }
}

impl<B: Backend> Client<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn actions(&self) -> Actions<&B> {
        Actions::new(&self.backend)
    }

    pub fn billing(&self) -> Billing<&B> {
        Billing::new(&self.backend)
    }

    pub fn isos(&self) -> Isos<&B> {
        Isos::new(&self.backend)
    }

    pub fn locations(&self) -> Locations<&B> {
        Locations::new(&self.backend)
    }

    pub fn placement_groups(&self) -> PlacementGroups<&B> {
        PlacementGroups::new(&self.backend)
    }

    pub fn server_types(&self) -> ServerTypes<&B> {
        ServerTypes::new(&self.backend)
    }

    pub fn ssh_keys(&self) -> SshKeys<&B> {
        SshKeys::new(&self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpRequest;
    use std::cell::RefCell;

    /// Transport that answers every request with one fixed response and
    /// keeps the requests it saw.
    struct StaticTransport {
        response: HttpResponse,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Transport for StaticTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            Ok(self.response.clone())
        }
    }

    fn client(status: u16, body: &str) -> Client<HttpBackend<StaticTransport>> {
        let transport = StaticTransport {
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            },
            seen: RefCell::new(Vec::new()),
        };
        Client::with_backend(HttpBackend::new(
            ClientConfig::new("http://localhost:3000"),
            transport,
        ))
    }

    #[test]
    fn retrieve_goes_through_transport() {
        let c = client(
            200,
            r#"{"ssh_key":{"id":3,"name":"laptop","fingerprint":"b7:2f","public_key":"ssh-ed25519 AAAA","labels":{},"created":"2016-01-30T23:50:00+00:00"}}"#,
        );
        let key = c.ssh_keys().retrieve(3).unwrap().ssh_key;
        assert_eq!(key.name, "laptop");
        let seen = c.backend().transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "http://localhost:3000/ssh_keys/3");
    }

    #[test]
    fn not_found_maps_to_dedicated_variant() {
        let c = client(404, r#"{"error":{"code":"not_found","message":"not found"}}"#);
        let err = c.isos().retrieve(1).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn error_envelope_is_parsed() {
        let c = client(
            422,
            r#"{"error":{"code":"uniqueness_error","message":"SSH key with the same fingerprint already exists"}}"#,
        );
        let err = c
            .ssh_keys()
            .create(Params::new().with("name", "dup").with("public_key", "ssh-ed25519 AAAA"))
            .unwrap_err();
        match err {
            ApiError::Http {
                status, code, message, ..
            } => {
                assert_eq!(status, 422);
                assert_eq!(code, "uniqueness_error");
                assert!(message.contains("same fingerprint"));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn bad_json_is_a_deserialization_error() {
        let c = client(200, "not json");
        let err = c.locations().list(Params::new()).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn delete_accepts_no_content() {
        let c = client(204, "");
        assert!(c.placement_groups().delete(9).is_ok());
    }

    #[test]
    fn unsupported_call_fails_before_transport() {
        let c = client(200, "{}");
        let call = ApiCall::new(Resource::Billing, Operation::Delete, Params::for_id(1));
        let err = c.backend().dispatch(&call).unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedOperation { .. }));
        assert!(c.backend().transport.seen.borrow().is_empty());
    }

    #[derive(Serialize, Deserialize)]
    struct Unserializable {
        #[serde(serialize_with = "refuse")]
        count: u32,
    }

    fn refuse<S: serde::Serializer>(_: &u32, _: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("count cannot be exported"))
    }

    impl Payload for Unserializable {}

    #[test]
    fn export_failure_is_a_serialization_error() {
        let err = Unserializable { count: 1 }.to_value().unwrap_err();
        assert_eq!(err, ApiError::Serialization("count cannot be exported".to_string()));
    }
}
