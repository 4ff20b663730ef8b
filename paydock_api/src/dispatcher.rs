//! Request dispatch: URL composition, authentication, transport and error translation.

use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    config::Config,
    query::Query,
    types::{ErrorResponse, Parsed, Response},
    Error,
};

/// Header carrying the account secret key.
pub const SECRET_KEY_HEADER: &str = "x-user-secret-key";

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Whether requests with this verb write a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", reqwest::Method::from(*self))
    }
}

/// One outbound call: where it goes, what it carries and how it authenticates.
pub struct ApiRequest<'a> {
    pub method: Method,
    /// Path relative to the configured base URL, e.g. `charges/abc/capture`.
    pub path: String,
    pub query: Option<&'a (dyn Query + Sync)>,
    /// Serialized JSON body. Only written for POST and PUT; `None` sends an empty body.
    pub body: Option<String>,
    pub exclude_secret_key: bool,
    /// Replaces the configured secret key for this call. Empty means no override.
    pub secret_key_override: Option<&'a str>,
}

impl<'a> ApiRequest<'a> {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            exclude_secret_key: false,
            secret_key_override: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: &'a (dyn Query + Sync)) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` as the JSON payload.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_string(body).map_err(Error::Serialize)?);
        Ok(self)
    }

    pub fn with_secret_key(mut self, secret_key: Option<&'a str>) -> Self {
        self.secret_key_override = secret_key;
        self
    }

    /// Sends the request without the secret key header (public-key endpoints).
    pub fn without_secret_key(mut self) -> Self {
        self.exclude_secret_key = true;
        self
    }
}

/// Performs HTTP calls against the configured API and translates their outcome.
///
/// Each call is one round trip: no retries, no caching. A failure is reported
/// as [`Error::Timeout`] when nothing came back, or [`Error::Response`] when
/// the server replied with an error payload. Problems found before any I/O,
/// such as a secret key that cannot be sent as a header, are [`Error::Config`].
pub struct Dispatcher {
    config: Config,
    http: reqwest::Client,
}

impl Dispatcher {
    /// Creates a dispatcher over an existing HTTP client.
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Creates a dispatcher with a fresh HTTP client using the configured timeout.
    pub fn from_config(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Config(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self::new(config, http))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn get_url(&self, path: &str, query: Option<&(dyn Query + Sync)>) -> Result<Url, Error> {
        let raw = format!("{}{}", self.config.base_url(), path.trim_start_matches('/'));
        let url = Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Config(format!("invalid request URL '{}': {}", raw, e))
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn secret_key_for<'r>(&'r self, request: &'r ApiRequest<'_>) -> Option<&'r str> {
        if request.exclude_secret_key {
            return None;
        }
        match request.secret_key_override {
            Some(key) if !key.is_empty() => Some(key),
            _ => Some(self.config.secret_key()),
        }
    }

    /// Sends the request and returns the response body exactly as received.
    pub async fn send_text(&self, request: &ApiRequest<'_>) -> Result<String, Error> {
        let url = self.get_url(&request.path, request.query)?;
        let secret_key = self.secret_key_for(request);
        tracing::debug!(
            method = %request.method,
            path = url.path(),
            authenticated = secret_key.is_some(),
            "Dispatching request"
        );

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(self.config.timeout());
        if let Some(key) = secret_key {
            builder = builder.header(SECRET_KEY_HEADER, secret_key_header(key)?);
        }
        if request.method.has_body() {
            builder = builder.body(request.body.clone().unwrap_or_default());
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_builder() {
                tracing::error!("Could not build {} {}: {}", request.method, request.path, e);
                return Error::Config(format!("could not build request: {}", e));
            }
            tracing::error!("No response for {} {}: {}", request.method, request.path, e);
            Error::Timeout { source: Some(e) }
        })?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Timeout { source: Some(e) }
        })?;
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| {
            tracing::error!("Response body with status {} is not valid UTF-8: {}", status, e);
            Error::Encoding {
                status: status.as_u16(),
                source: e,
            }
        })?;

        if !status.is_success() {
            return Err(translate_error(status.as_u16(), body));
        }

        Ok(body)
    }

    /// Sends the request and deserializes the body into `T`, keeping the raw text.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: &ApiRequest<'_>,
    ) -> Result<Parsed<T>, Error> {
        let raw = self.send_text(request).await?;
        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Parsed { value, raw }),
            Err(e) => {
                tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&raw));
                Err(Error::Deserialize {
                    body: raw,
                    source: e,
                })
            }
        }
    }

    /// Sends the request and returns the standard envelope with `json_response` filled in.
    pub async fn call<T: DeserializeOwned>(
        &self,
        request: &ApiRequest<'_>,
    ) -> Result<Response<T>, Error> {
        Ok(self.send::<Response<T>>(request).await?.into())
    }
}

/// The key is sensitive and never echoed in the error.
fn secret_key_header(key: &str) -> Result<reqwest::header::HeaderValue, Error> {
    let mut value = reqwest::header::HeaderValue::from_str(key).map_err(|_| {
        tracing::error!("Secret key contains characters not allowed in a header");
        Error::Config("secret key contains characters not allowed in a header".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

fn translate_error(status: u16, body: String) -> Error {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(mut error) => {
            if error.status == 0 {
                error.status = status;
            }
            tracing::warn!(
                "Request failed with status {}: {}",
                status,
                error.error.message
            );
            error.json_response = body;
            Error::Response { status, error }
        }
        Err(e) => {
            tracing::error!(
                "Unparseable error body (status {}): {} | body: {}",
                status,
                e,
                truncate_body(&body)
            );
            Error::ErrorPayload {
                status,
                body,
                source: e,
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ChargeSearchRequest;

    fn dispatcher() -> Dispatcher {
        Dispatcher::from_config(Config::with_base_url("https://example.com/v1", "sk_default").unwrap())
            .unwrap()
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let d = dispatcher();
        let query = ChargeSearchRequest::default().with_limit(10);
        let url = d.get_url("charges", Some(&query)).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/charges?limit=10");

        let url = d.get_url("/charges/abc/capture", None).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/charges/abc/capture");
    }

    #[test]
    fn secret_key_selection() {
        let d = dispatcher();

        let default = ApiRequest::get("charges");
        assert_eq!(d.secret_key_for(&default), Some("sk_default"));

        let overridden = ApiRequest::get("charges").with_secret_key(Some("sk_call"));
        assert_eq!(d.secret_key_for(&overridden), Some("sk_call"));

        let empty_override = ApiRequest::get("charges").with_secret_key(Some(""));
        assert_eq!(d.secret_key_for(&empty_override), Some("sk_default"));

        let excluded = ApiRequest::get("charges")
            .with_secret_key(Some("sk_call"))
            .without_secret_key();
        assert_eq!(d.secret_key_for(&excluded), None);
    }

    #[test]
    fn only_post_and_put_carry_bodies() {
        assert!(Method::Post.has_body());
        assert!(Method::Put.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
    }

    #[test]
    fn translate_error_parses_structured_payload() {
        let body = r#"{"status":400,"error":{"message":"Invalid amount","code":"invalid_amount"}}"#;
        match translate_error(400, body.to_string()) {
            Error::Response { status, error } => {
                assert_eq!(status, 400);
                assert_eq!(error.error.message, "Invalid amount");
                assert_eq!(error.json_response, body);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn translate_error_fills_missing_status_from_http() {
        let body = r#"{"error":{"message":"Access forbidden","code":"Unauthorized"}}"#;
        match translate_error(403, body.to_string()) {
            Error::Response { status, error } => {
                assert_eq!(status, 403);
                assert_eq!(error.status, 403);
                assert_eq!(error.error.code.as_deref(), Some("Unauthorized"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn secret_key_with_control_characters_is_config_error() {
        assert!(matches!(secret_key_header("sk\nbad"), Err(Error::Config(_))));
        assert!(secret_key_header("sk_live_123").unwrap().is_sensitive());
    }

    #[test]
    fn translate_error_reports_unparseable_payload() {
        let err = translate_error(502, "Bad Gateway".to_string());
        assert!(matches!(err, Error::ErrorPayload { status: 502, ref body, .. } if body == "Bad Gateway"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }
}
