//! HTTP client for the Paydock REST API.

use std::borrow::Cow;

use crate::{
    charges::Charges, config::Config, customers::Customers, dispatcher::Dispatcher, Error,
};

/// Entry point to the API. Owns the [`Dispatcher`] and hands out facades.
///
/// ```no_run
/// # async fn run() -> Result<(), paydock_api::Error> {
/// use paydock_api::{Client, Config, Environment};
///
/// let client = Client::from_config(Config::new(Environment::Sandbox, "secret"))?;
/// let charges = client.charges().list().await?;
/// println!("{} charges", charges.resource.data.len());
/// # Ok(())
/// # }
/// ```
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Creates a client with a default HTTP transport.
    pub fn from_config(config: Config) -> Result<Self, Error> {
        Ok(Self::new(Dispatcher::from_config(config)?))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Operations on `/charges`.
    pub fn charges(&self) -> Charges<'_> {
        Charges::new(&self.dispatcher)
    }

    /// Operations on `/customers`.
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(&self.dispatcher)
    }
}

/// Percent-encodes an identifier so it stays a single path segment.
///
/// Empty identifiers and dot segments (`.`, `..`) are rejected: URL
/// normalisation would otherwise resolve them to a different endpoint.
pub(crate) fn escape_segment(id: &str) -> Result<Cow<'_, str>, Error> {
    if id.is_empty() || id.chars().all(|c| c == '.') {
        return Err(Error::Config(format!("invalid resource identifier '{}'", id)));
    }
    Ok(urlencoding::encode(id))
}
