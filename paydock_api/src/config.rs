//! Client configuration: base URL, secret key and timeout.
//!
//! A [`Config`] is built once at startup and handed to the
//! [`Dispatcher`](crate::Dispatcher). It is never mutated afterwards; per-call
//! credential overrides go through the facades instead.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::Error;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

const SANDBOX_URL: &str = "https://api-sandbox.paydock.com/v1/";
const PRODUCTION_URL: &str = "https://api.paydock.com/v1/";

/// Which hosted API to talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Sandbox => "sandbox",
                Environment::Production => "production",
            }
        )
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(Error::Config(format!("unknown environment '{}'", other))),
        }
    }
}

/// Connection settings shared by every request a client makes.
#[derive(Clone)]
pub struct Config {
    base_url: String,
    secret_key: String,
    timeout: Duration,
}

impl Config {
    /// Targets one of the hosted environments with the default timeout.
    pub fn new(environment: Environment, secret_key: &str) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            secret_key: secret_key.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Targets a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, secret_key: &str) -> Result<Self, Error> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            secret_key: secret_key.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    /// Builds a config from `PAYDOCK_*` environment variables.
    ///
    /// `PAYDOCK_SECRET_KEY` is required. `PAYDOCK_BASE_URL` takes precedence
    /// over `PAYDOCK_ENVIRONMENT` (default sandbox). `PAYDOCK_TIMEOUT_MS` is
    /// optional.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`], but a non-empty `secret_key` takes the place
    /// of `PAYDOCK_SECRET_KEY`, which then need not be set.
    pub fn from_env_with_secret_key(secret_key: Option<&str>) -> Result<Self, Error> {
        Self::from_lookup(overlay_secret_key(
            |name| std::env::var(name).ok(),
            secret_key,
        ))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let secret_key = lookup("PAYDOCK_SECRET_KEY")
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("PAYDOCK_SECRET_KEY is not set".to_string()))?;

        let config = match lookup("PAYDOCK_BASE_URL").filter(|u| !u.is_empty()) {
            Some(base_url) => Self::with_base_url(&base_url, &secret_key)?,
            None => {
                let environment = match lookup("PAYDOCK_ENVIRONMENT") {
                    Some(env) if !env.is_empty() => env.parse()?,
                    _ => Environment::default(),
                };
                Self::new(environment, &secret_key)
            }
        };

        match lookup("PAYDOCK_TIMEOUT_MS") {
            Some(ms) if !ms.is_empty() => {
                let ms = ms.parse::<u64>().map_err(|e| {
                    Error::Config(format!("PAYDOCK_TIMEOUT_MS '{}' is invalid: {}", ms, e))
                })?;
                Ok(config.with_timeout_ms(ms))
            }
            _ => Ok(config),
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Duration::from_millis(timeout_ms);
        self
    }

    /// Base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn overlay_secret_key<'a>(
    lookup: impl Fn(&str) -> Option<String> + 'a,
    secret_key: Option<&'a str>,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| match secret_key {
        Some(key) if !key.is_empty() && name == "PAYDOCK_SECRET_KEY" => Some(key.to_string()),
        _ => lookup(name),
    }
}

/// Relative endpoint paths are joined onto the base, so it must end in `/`.
fn parse_base_url(base_url: &str) -> Result<String, Error> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    let url = Url::parse(&normalized)
        .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", base_url, e)))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("'{}' cannot be a base URL", base_url)));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn environments_resolve_to_hosted_urls() {
        let sandbox = Config::new(Environment::Sandbox, "sk");
        assert_eq!(sandbox.base_url(), SANDBOX_URL);

        let production = Config::new(Environment::Production, "sk");
        assert_eq!(production.base_url(), PRODUCTION_URL);
        assert_eq!(production.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn custom_base_url_gets_trailing_slash() {
        let config = Config::with_base_url("http://127.0.0.1:8080/v1", "sk").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/v1/");
        assert_eq!(
            Url::parse(config.base_url()).unwrap().join("charges").unwrap().as_str(),
            "http://127.0.0.1:8080/v1/charges"
        );
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let err = Config::with_base_url("not a url", "sk").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn from_lookup_requires_secret_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("PAYDOCK_SECRET_KEY"));
    }

    #[test]
    fn from_lookup_reads_all_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("PAYDOCK_SECRET_KEY", "sk_live"),
            ("PAYDOCK_ENVIRONMENT", "production"),
            ("PAYDOCK_TIMEOUT_MS", "2500"),
        ]))
        .unwrap();
        assert_eq!(config.secret_key(), "sk_live");
        assert_eq!(config.base_url(), PRODUCTION_URL);
        assert_eq!(config.timeout(), Duration::from_millis(2500));
    }

    #[test]
    fn from_lookup_base_url_overrides_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("PAYDOCK_SECRET_KEY", "sk"),
            ("PAYDOCK_ENVIRONMENT", "production"),
            ("PAYDOCK_BASE_URL", "http://localhost:9000"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:9000/");
    }

    #[test]
    fn from_lookup_rejects_bad_timeout() {
        let err = Config::from_lookup(lookup_from(&[
            ("PAYDOCK_SECRET_KEY", "sk"),
            ("PAYDOCK_TIMEOUT_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn explicit_secret_key_stands_in_for_env_var() {
        let config = Config::from_lookup(overlay_secret_key(
            lookup_from(&[("PAYDOCK_ENVIRONMENT", "production")]),
            Some("sk_flag"),
        ))
        .unwrap();
        assert_eq!(config.secret_key(), "sk_flag");
        assert_eq!(config.base_url(), PRODUCTION_URL);

        let config = Config::from_lookup(overlay_secret_key(
            lookup_from(&[("PAYDOCK_SECRET_KEY", "sk_env")]),
            Some("sk_flag"),
        ))
        .unwrap();
        assert_eq!(config.secret_key(), "sk_flag");

        let config = Config::from_lookup(overlay_secret_key(
            lookup_from(&[("PAYDOCK_SECRET_KEY", "sk_env")]),
            Some(""),
        ))
        .unwrap();
        assert_eq!(config.secret_key(), "sk_env");

        let err = Config::from_lookup(overlay_secret_key(lookup_from(&[]), None)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn debug_redacts_secret_key() {
        let config = Config::new(Environment::Sandbox, "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
