//! Value types shared by several resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-defined key/value labels.
pub type Labels = BTreeMap<String, String>;

/// A price as decimal strings, exactly as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub net: String,
    pub gross: String,
}

/// Hourly and monthly price of something in one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPrice {
    pub location: String,
    pub price_hourly: Price,
    pub price_monthly: Price,
}

/// Reference to an entity affected by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
}
