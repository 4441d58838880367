//! Canonical example payloads returned when the response queue is empty.
//!
//! All values are fixed literals; timestamps never come from the clock.
//! Retrieve and update echo a numeric `id` parameter, and create/update echo
//! `name`, `public_key` and `labels`, so chained calls stay plausible.

use hcloud_core::{ApiCall, ApiError, HttpResponse, Operation, ParamValue, Params, Resource};
use serde_json::{json, Value};

const CREATED: &str = "2016-01-30T23:55:00+00:00";

fn pagination(total: usize) -> Value {
    json!({
        "pagination": {
            "page": 1,
            "per_page": 25,
            "previous_page": null,
            "next_page": null,
            "last_page": 1,
            "total_entries": total
        }
    })
}

fn id_or(params: &Params, fallback: u64) -> u64 {
    params
        .get("id")
        .and_then(ParamValue::as_i64)
        .and_then(|id| u64::try_from(id).ok())
        .unwrap_or(fallback)
}

fn str_or(params: &Params, key: &str, fallback: &str) -> String {
    params
        .get(key)
        .and_then(ParamValue::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn labels_or(params: &Params, fallback: Value) -> Value {
    params
        .get("labels")
        .and_then(|labels| serde_json::to_value(labels).ok())
        .unwrap_or(fallback)
}

fn price(net: &str, gross: &str) -> Value {
    json!({"net": net, "gross": gross})
}

fn location_price(location: &str) -> Value {
    json!({
        "location": location,
        "price_hourly": price("0.0060000000", "0.0071400000"),
        "price_monthly": price("3.7900000000", "4.5101000000")
    })
}

fn action(id: u64) -> Value {
    json!({
        "id": id,
        "command": "start_server",
        "status": "success",
        "progress": 100,
        "started": CREATED,
        "finished": "2016-01-30T23:56:00+00:00",
        "resources": [{"id": 42, "type": "server"}],
        "error": null
    })
}

fn actions() -> Vec<Value> {
    vec![
        action(13),
        json!({
            "id": 14,
            "command": "create_server",
            "status": "running",
            "progress": 50,
            "started": CREATED,
            "finished": null,
            "resources": [{"id": 43, "type": "server"}],
            "error": null
        }),
        json!({
            "id": 15,
            "command": "attach_volume",
            "status": "error",
            "progress": 100,
            "started": CREATED,
            "finished": "2016-01-30T23:57:00+00:00",
            "resources": [{"id": 44, "type": "volume"}],
            "error": {"code": "action_failed", "message": "Action failed"}
        }),
    ]
}

fn pricing() -> Value {
    json!({
        "currency": "EUR",
        "vat_rate": "19.000000",
        "image": {"price_per_gb_month": price("0.0100000000", "0.0119000000")},
        "volume": {"price_per_gb_month": price("0.0440000000", "0.0523600000")},
        "server_backup": {"percentage": "20.0000000000"},
        "server_types": [
            {"id": 1, "name": "cx11", "prices": [location_price("fsn1")]}
        ]
    })
}

fn iso(id: u64) -> Value {
    json!({
        "id": id,
        "name": "FreeBSD-11.0-RELEASE-amd64-dvd1",
        "description": "FreeBSD 11.0 x64",
        "type": "public",
        "deprecated": null,
        "architecture": "x86"
    })
}

fn location(id: u64) -> Value {
    json!({
        "id": id,
        "name": "fsn1",
        "description": "Falkenstein DC Park 1",
        "country": "DE",
        "city": "Falkenstein",
        "latitude": 50.47612,
        "longitude": 12.370071,
        "network_zone": "eu-central"
    })
}

fn placement_group(id: u64, params: &Params) -> Value {
    json!({
        "id": id,
        "name": str_or(params, "name", "my Placement Group"),
        "labels": labels_or(params, json!({"key": "value"})),
        "type": str_or(params, "type", "spread"),
        "created": CREATED,
        "servers": [4711, 4712]
    })
}

fn server_type(id: u64) -> Value {
    json!({
        "id": id,
        "name": "cx11",
        "description": "CX11",
        "cores": 1,
        "memory": 2.0,
        "disk": 20,
        "deprecated": false,
        "prices": [location_price("fsn1")],
        "storage_type": "local",
        "cpu_type": "shared",
        "architecture": "x86"
    })
}

fn ssh_key(id: u64, params: &Params) -> Value {
    json!({
        "id": id,
        "name": str_or(params, "name", "My ssh key"),
        "fingerprint": "b7:2f:30:a0:2f:6c:58:6c:21:04:58:61:ba:06:3b:2f",
        "public_key": str_or(params, "public_key", "ssh-rsa AAAjjk76kgf...Xt"),
        "labels": labels_or(params, json!({})),
        "created": CREATED
    })
}

/// The default payload for `call`, or an error when the resource does not
/// serve that operation.
pub fn default_response(call: &ApiCall) -> Result<HttpResponse, ApiError> {
    let params = &call.params;
    let body = match (call.resource, call.operation) {
        (Resource::Actions, Operation::List) => {
            let actions = actions();
            json!({"actions": actions, "meta": pagination(actions.len())})
        }
        (Resource::Actions, Operation::Retrieve) => json!({"action": action(id_or(params, 13))}),

        (Resource::Billing, Operation::ListPricing) => json!({"pricing": pricing()}),

        (Resource::Isos, Operation::List) => json!({"isos": [iso(4711)], "meta": pagination(1)}),
        (Resource::Isos, Operation::Retrieve) => json!({"iso": iso(id_or(params, 4711))}),

        (Resource::Locations, Operation::List) => {
            json!({"locations": [location(1)], "meta": pagination(1)})
        }
        (Resource::Locations, Operation::Retrieve) => {
            json!({"location": location(id_or(params, 1))})
        }

        (Resource::PlacementGroups, Operation::List) => json!({
            "placement_groups": [placement_group(897, &Params::new())],
            "meta": pagination(1)
        }),
        (Resource::PlacementGroups, Operation::Retrieve | Operation::Update) => {
            json!({"placement_group": placement_group(id_or(params, 897), params)})
        }
        (Resource::PlacementGroups, Operation::Create) => {
            let mut group = placement_group(897, params);
            group["servers"] = json!([]);
            return Ok(HttpResponse::json(
                201,
                &json!({"placement_group": group, "action": null}),
            ));
        }

        (Resource::ServerTypes, Operation::List) => {
            json!({"server_types": [server_type(1)], "meta": pagination(1)})
        }
        (Resource::ServerTypes, Operation::Retrieve) => {
            json!({"server_type": server_type(id_or(params, 1))})
        }

        (Resource::SshKeys, Operation::List) => json!({
            "ssh_keys": [ssh_key(2323, &Params::new())],
            "meta": pagination(1)
        }),
        (Resource::SshKeys, Operation::Retrieve | Operation::Update) => {
            json!({"ssh_key": ssh_key(id_or(params, 2323), params)})
        }
        (Resource::SshKeys, Operation::Create) => {
            return Ok(HttpResponse::json(201, &json!({"ssh_key": ssh_key(2323, params)})));
        }

        (Resource::PlacementGroups | Resource::SshKeys, Operation::Delete) => {
            return Ok(HttpResponse::no_content());
        }

        (resource, operation) => {
            return Err(ApiError::UnsupportedOperation {
                resource: resource.to_string(),
                operation: operation.to_string(),
            })
        }
    };
    Ok(HttpResponse::json(200, &body))
}
