//! Facade over the `/charges` endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    client::escape_segment,
    dispatcher::{ApiRequest, Dispatcher},
    query::ChargeSearchRequest,
    types::{
        ChargeItemResponse, ChargeItemsResponse, ChargeRefundResponse, ChargeRequest,
        ChargeResponse,
    },
    Error,
};

/// Body for partial capture and refund.
#[derive(Serialize)]
struct AmountBody {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

/// Charge operations. Obtain through [`Client::charges`](crate::Client::charges).
pub struct Charges<'a> {
    dispatcher: &'a Dispatcher,
    secret_key: Option<String>,
}

impl<'a> Charges<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self {
            dispatcher,
            secret_key: None,
        }
    }

    /// Uses `secret_key` instead of the configured one for calls made through this facade.
    pub fn with_secret_key(mut self, secret_key: &str) -> Self {
        self.secret_key = Some(secret_key.to_string());
        self
    }

    fn request<'r>(&'r self, request: ApiRequest<'r>) -> ApiRequest<'r> {
        request.with_secret_key(self.secret_key.as_deref())
    }

    /// Creates and captures a charge.
    pub async fn add(&self, charge: &ChargeRequest) -> Result<ChargeResponse, Error> {
        let request = self.request(ApiRequest::post("charges")).with_json(charge)?;
        self.dispatcher.call(&request).await
    }

    /// Creates a charge without capturing it; capture later with [`Charges::capture`].
    pub async fn authorise(&self, charge: &ChargeRequest) -> Result<ChargeResponse, Error> {
        let request = self
            .request(ApiRequest::post("charges?capture=false"))
            .with_json(charge)?;
        self.dispatcher.call(&request).await
    }

    /// Captures a previously authorised charge. `None` captures the full amount.
    pub async fn capture(
        &self,
        charge_id: &str,
        amount: Option<Decimal>,
    ) -> Result<ChargeResponse, Error> {
        let mut request = self.request(ApiRequest::post(format!(
            "charges/{}/capture",
            escape_segment(charge_id)?
        )));
        if let Some(amount) = amount {
            request = request.with_json(&AmountBody { amount })?;
        }
        self.dispatcher.call(&request).await
    }

    /// Cancels a previously authorised charge.
    pub async fn cancel_authorisation(&self, charge_id: &str) -> Result<ChargeResponse, Error> {
        let request = self.request(ApiRequest::delete(format!(
            "charges/{}/capture",
            escape_segment(charge_id)?
        )));
        self.dispatcher.call(&request).await
    }

    /// Lists charges (the API caps the page at 1000).
    pub async fn list(&self) -> Result<ChargeItemsResponse, Error> {
        let request = self.request(ApiRequest::get("charges"));
        self.dispatcher.call(&request).await
    }

    /// Lists charges matching the given filters.
    pub async fn search(
        &self,
        search: &ChargeSearchRequest,
    ) -> Result<ChargeItemsResponse, Error> {
        let request = self.request(ApiRequest::get("charges").with_query(search));
        self.dispatcher.call(&request).await
    }

    /// Fetches a single charge by ID.
    pub async fn get(&self, charge_id: &str) -> Result<ChargeItemResponse, Error> {
        let request = self.request(ApiRequest::get(format!(
            "charges/{}",
            escape_segment(charge_id)?
        )));
        self.dispatcher.call(&request).await
    }

    /// Refunds a charge. `None` refunds the remaining amount; a value issues a partial refund.
    pub async fn refund(
        &self,
        charge_id: &str,
        amount: Option<Decimal>,
    ) -> Result<ChargeRefundResponse, Error> {
        let mut request = self.request(ApiRequest::post(format!(
            "charges/{}/refunds",
            escape_segment(charge_id)?
        )));
        if let Some(amount) = amount {
            request = request.with_json(&AmountBody { amount })?;
        }
        self.dispatcher.call(&request).await
    }

    /// Archives a charge so it no longer shows in default listings.
    pub async fn archive(&self, charge_id: &str) -> Result<ChargeRefundResponse, Error> {
        let request = self.request(ApiRequest::delete(format!(
            "charges/{}",
            escape_segment(charge_id)?
        )));
        self.dispatcher.call(&request).await
    }
}
