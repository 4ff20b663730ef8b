//! Charge-related request and response models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{customer::CustomerRequest, meta::Response, ObjectID, PaymentSource};

/// Body for creating (or authorising) a charge.
///
/// Pay with either a one-time `token`, an existing `customer_id` /
/// `payment_source_id`, or an inline `customer` carrying a payment source.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChargeRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<ObjectID>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source_id: Option<ObjectID>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRequest>,
}

impl ChargeRequest {
    /// Starts a request for `amount` in `currency` (ISO 4217, e.g. "AUD").
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_customer_id(mut self, customer_id: &str) -> Self {
        self.customer_id = Some(customer_id.to_string());
        self
    }

    pub fn with_payment_source_id(mut self, payment_source_id: &str) -> Self {
        self.payment_source_id = Some(payment_source_id.to_string());
        self
    }

    pub fn with_customer(mut self, customer: CustomerRequest) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_meta(mut self, key: &str, value: &str) -> Self {
        self.meta
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }
}

/// A charge as returned by the API.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Charge {
    #[serde(rename = "_id")]
    pub id: ObjectID,

    pub amount: Decimal,

    pub currency: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub customer_id: Option<ObjectID>,

    #[serde(default)]
    pub customer: Option<ChargeCustomer>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub meta: Option<HashMap<String, String>>,

    #[serde(default)]
    pub archived: bool,

    #[serde(default)]
    pub one_off: Option<bool>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Customer details embedded in a charge.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChargeCustomer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub payment_source: Option<PaymentSource>,
}

/// One gateway interaction (sale, authorisation, capture, refund) recorded on a charge.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: ObjectID,
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub status_code_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Returned by add, authorise, capture and cancel.
pub type ChargeResponse = Response<Charge>;
/// Returned when fetching a single charge.
pub type ChargeItemResponse = Response<Charge>;
/// Returned by charge listing and search.
pub type ChargeItemsResponse = Response<Vec<Charge>>;
/// Returned by refund and archive.
pub type ChargeRefundResponse = Response<Charge>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn charge_request_serializes_amount_as_number_and_skips_absent_fields() {
        let request = ChargeRequest::new(Decimal::from_str("10.50").unwrap(), "AUD")
            .with_token("tok_1")
            .with_meta("order", "A-1");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["amount"], serde_json::json!(10.5));
        assert_eq!(value["currency"], "AUD");
        assert_eq!(value["token"], "tok_1");
        assert_eq!(value["meta"]["order"], "A-1");
        assert!(value.get("customer_id").is_none());
        assert!(value.get("customer").is_none());
    }

    #[test]
    fn charge_accepts_string_or_numeric_amounts() {
        let numeric: Charge =
            serde_json::from_str(r#"{"_id":"c1","amount":12.3,"currency":"AUD"}"#).unwrap();
        let text: Charge =
            serde_json::from_str(r#"{"_id":"c2","amount":"12.30","currency":"AUD"}"#).unwrap();

        assert_eq!(numeric.amount, Decimal::from_str("12.3").unwrap());
        assert_eq!(text.amount, Decimal::from_str("12.30").unwrap());
        assert!(numeric.transactions.is_empty());
        assert!(!numeric.archived);
    }
}
