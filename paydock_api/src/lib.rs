//! Client SDK for the Paydock payments API.
//!
//! [`Client`] owns a [`Dispatcher`] built from an explicit [`Config`]; the
//! [`Charges`] and [`Customers`] facades map one method to one endpoint.
//! Every successful call returns the typed model together with the raw JSON
//! body (`json_response`). Failures come back as [`Error`].

mod charges;
mod client;
mod config;
mod customers;
mod dispatcher;
mod errors;
mod query;
pub mod types;
pub use self::charges::Charges;
pub use self::client::Client;
pub use self::config::{Config, Environment, DEFAULT_TIMEOUT_MS};
pub use self::customers::Customers;
pub use self::dispatcher::{ApiRequest, Dispatcher, Method, SECRET_KEY_HEADER};
pub use self::errors::Error;
pub use self::query::{ChargeSearchRequest, CustomerSearchRequest, Query, SortDirection};
