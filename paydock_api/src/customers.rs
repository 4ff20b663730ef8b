//! Facade over the `/customers` endpoints.

use crate::{
    client::escape_segment,
    dispatcher::{ApiRequest, Dispatcher},
    query::CustomerSearchRequest,
    types::{CustomerItemsResponse, CustomerRequest, CustomerResponse, CustomerUpdateRequest},
    Error,
};

/// Customer operations. Obtain through [`Client::customers`](crate::Client::customers).
pub struct Customers<'a> {
    dispatcher: &'a Dispatcher,
    secret_key: Option<String>,
}

impl<'a> Customers<'a> {
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

    pub async fn add(&self, customer: &CustomerRequest) -> Result<CustomerResponse, Error> {
        let request = self.request(ApiRequest::post("customers")).with_json(customer)?;
        self.dispatcher.call(&request).await
    }

    pub async fn list(&self) -> Result<CustomerItemsResponse, Error> {
        let request = self.request(ApiRequest::get("customers"));
        self.dispatcher.call(&request).await
    }

    pub async fn search(
        &self,
        search: &CustomerSearchRequest,
    ) -> Result<CustomerItemsResponse, Error> {
        let request = self.request(ApiRequest::get("customers").with_query(search));
        self.dispatcher.call(&request).await
    }

    pub async fn get(&self, customer_id: &str) -> Result<CustomerResponse, Error> {
        let request = self.request(ApiRequest::get(format!(
            "customers/{}",
            escape_segment(customer_id)?
        )));
        self.dispatcher.call(&request).await
    }

    /// Updates the given fields of a customer.
    pub async fn update(
        &self,
        customer_id: &str,
        update: &CustomerUpdateRequest,
    ) -> Result<CustomerResponse, Error> {
        let request = self
            .request(ApiRequest::post(format!(
                "customers/{}",
                escape_segment(customer_id)?
            )))
            .with_json(update)?;
        self.dispatcher.call(&request).await
    }

    pub async fn archive(&self, customer_id: &str) -> Result<CustomerResponse, Error> {
        let request = self.request(ApiRequest::delete(format!(
            "customers/{}",
            escape_segment(customer_id)?
        )));
        self.dispatcher.call(&request).await
    }
}
