//! Parameter bags passed to every resource operation.
//!
//! A `Params` value carries identifiers, list filters and create/update
//! payloads alike. The reserved key `id` names the target of retrieve,
//! update and delete; it is routed into the URL path and never into the
//! query string or body.
//!
//! Recognized keys per operation:
//! - list: `page`, `per_page`, `sort`, `name`, `label_selector`, plus
//!   `status` (actions), `type` (placement groups), `architecture` and
//!   `include_architecture_wildcard` (ISOs)
//! - retrieve, delete: `id`
//! - placement group create: `name`, `type`, `labels`; update: `id`, `name`, `labels`
//! - ssh key create: `name`, `public_key`, `labels`; update: `id`, `name`, `labels`
//!
//! Unrecognized keys are passed through untouched; the server validates.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

pub const ID_KEY: &str = "id";

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Interpret a raw query-string value: integers and booleans get their
    /// own variants, everything else stays a string. Only canonical integers
    /// become `Int`, so `007` or `+5` keep their exact text.
    pub fn infer(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            if n.to_string() == raw {
                return ParamValue::Int(n);
            }
        }
        match raw {
            "true" => ParamValue::Bool(true),
            "false" => ParamValue::Bool(false),
            _ => ParamValue::Str(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Str(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, ParamValue>> {
        match self {
            ParamValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Render a scalar for a query string. Maps have no query form.
    fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Map(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Str(s) => write!(f, "{s}"),
            ParamValue::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(n.into())
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(n.into())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<BTreeMap<String, ParamValue>> for ParamValue {
    fn from(m: BTreeMap<String, ParamValue>) -> Self {
        ParamValue::Map(m)
    }
}

impl From<Params> for ParamValue {
    fn from(p: Params) -> Self {
        ParamValue::Map(p.0)
    }
}

/// String-keyed bag of parameters for one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Params holding only an identifier.
    pub fn for_id(id: impl fmt::Display) -> Self {
        Self::new().with(ID_KEY, id.to_string())
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The identifier, rendered as a path segment.
    pub fn id(&self) -> Option<String> {
        self.get(ID_KEY).and_then(ParamValue::to_query_value)
    }

    /// Scalar entries except `id`, in key order. Nested maps are skipped.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(k, _)| k.as_str() != ID_KEY)
            .filter_map(|(k, v)| v.to_query_value().map(|v| (k.clone(), v)))
            .collect()
    }

    /// Build params from decoded query pairs.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), ParamValue::infer(v.as_ref())))
                .collect(),
        )
    }

    /// All entries except `id`, as the JSON body of a create or update.
    pub fn body(&self) -> ApiResult<serde_json::Value> {
        let mut payload = self.clone();
        payload.remove(ID_KEY);
        serde_json::to_value(payload).map_err(|e| ApiError::Serialization(e.to_string()))
    }
}

impl FromIterator<(String, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn infer_recognizes_scalars() {
        assert_eq!(ParamValue::infer("25"), ParamValue::Int(25));
        assert_eq!(ParamValue::infer("true"), ParamValue::Bool(true));
        assert_eq!(ParamValue::infer("id:asc"), ParamValue::Str("id:asc".to_string()));
    }

    #[test]
    fn infer_keeps_non_canonical_numbers_as_text() {
        let params = Params::from_query_pairs([("name", "007"), ("sort", "+5"), ("page", "-3")]);
        assert_eq!(params.get("name").and_then(ParamValue::as_str), Some("007"));
        assert_eq!(params.get("sort").and_then(ParamValue::as_str), Some("+5"));
        assert_eq!(params.get("page"), Some(&ParamValue::Int(-3)));
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("name".to_string(), "007".to_string()),
                ("page".to_string(), "-3".to_string()),
                ("sort".to_string(), "+5".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_skip_id_and_maps() {
        let labels: BTreeMap<String, ParamValue> =
            [("env".to_string(), ParamValue::from("prod"))].into_iter().collect();
        let params = Params::new()
            .with("id", "42")
            .with("page", 2)
            .with("sort", "id:asc")
            .with("labels", labels);
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("sort".to_string(), "id:asc".to_string()),
            ]
        );
        assert_eq!(params.id().as_deref(), Some("42"));
    }

    #[test]
    fn body_excludes_id_and_keeps_nesting() {
        let labels: BTreeMap<String, ParamValue> =
            [("env".to_string(), ParamValue::from("prod"))].into_iter().collect();
        let params = Params::for_id(7).with("name", "web").with("labels", labels);
        assert_eq!(params.body().unwrap(), json!({"name": "web", "labels": {"env": "prod"}}));
    }

    #[test]
    fn deserializes_from_json_object() {
        let params: Params =
            serde_json::from_str(r#"{"name":"key","per_page":5,"labels":{"a":"b"}}"#).unwrap();
        assert_eq!(params.get("per_page"), Some(&ParamValue::Int(5)));
        assert!(params.get("labels").and_then(ParamValue::as_map).is_some());
    }

    #[test]
    fn numeric_id_renders_without_quotes() {
        let params = Params::new().with("id", 456);
        assert_eq!(params.id().as_deref(), Some("456"));
        assert_eq!(params.get("id").and_then(ParamValue::as_i64), Some(456));
    }
}
