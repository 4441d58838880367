//! Billing: the price list for every billable product.

use serde::{Deserialize, Serialize};

use crate::client::{invoke, Backend, Payload};
use crate::endpoint::{Operation, Resource};
use crate::error::ApiResult;
use crate::params::Params;
use crate::types::{LocationPrice, Price};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerGigabytePricing {
    pub price_per_gb_month: Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerBackupPricing {
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTypePricing {
    pub id: u64,
    pub name: String,
    pub prices: Vec<LocationPrice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub currency: String,
    pub vat_rate: String,
    pub image: PerGigabytePricing,
    pub volume: PerGigabytePricing,
    pub server_backup: ServerBackupPricing,
    #[serde(default)]
    pub server_types: Vec<ServerTypePricing>,
}

impl Pricing {
    pub fn server_type(&self, name: &str) -> Option<&ServerTypePricing> {
        self.server_types.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPricingResponse {
    pub pricing: Pricing,
}

impl Payload for ListPricingResponse {}

pub struct Billing<B> {
    backend: B,
}

impl<B: Backend> Billing<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn list_pricing(&self) -> ApiResult<ListPricingResponse> {
        invoke(&self.backend, Resource::Billing, Operation::ListPricing, Params::new())
    }
}
