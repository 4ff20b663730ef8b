//! Customer and payment-source models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{meta::Response, ObjectID};

/// Body for creating a customer. Also embedded in a charge request to create
/// the customer inline.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSourceRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
}

/// Body for updating an existing customer. Only present fields are changed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CustomerUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Payment source to charge by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_source: Option<ObjectID>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSourceRequest>,
}

/// Card or bank account details sent to a gateway. Card fields and bank
/// fields are mutually exclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PaymentSourceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<ObjectID>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_ccv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_bsb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// A customer as returned by the API.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: ObjectID,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub default_source: Option<ObjectID>,
    #[serde(default)]
    pub payment_sources: Vec<PaymentSource>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A stored payment source. Card numbers come back masked.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentSource {
    #[serde(rename = "_id", default)]
    pub id: Option<ObjectID>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub gateway_id: Option<ObjectID>,
    #[serde(default)]
    pub card_name: Option<String>,
    #[serde(default)]
    pub card_number_last4: Option<String>,
    #[serde(default)]
    pub card_scheme: Option<String>,
    #[serde(default)]
    pub expire_month: Option<u8>,
    #[serde(default)]
    pub expire_year: Option<u16>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Returned by add, get, update and archive.
pub type CustomerResponse = Response<Customer>;
/// Returned by customer listing and search.
pub type CustomerItemsResponse = Response<Vec<Customer>>;
