//! Client configuration: credential, endpoint and timeouts.
//!
//! Configuration is fixed when a client is constructed. There is no global
//! state; two clients with different keys can live side by side.

use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
pub const BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";
pub const TIMEOUT_SECS_ENV: &str = "ELEVENLABS_TIMEOUT_SECS";
pub const PROXY_URL_ENV: &str = "ELEVENLABS_PROXY_URL";

const KEYRING_SERVICE: &str = "elevenlabs";
const KEYRING_USER: &str = "api_key";

/// API key sent as the `xi-api-key` header.
///
/// `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Everything a client needs to talk to the service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    /// Applies to each call as a whole, including streamed bodies.
    pub timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub proxy_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pool_idle_timeout: Duration::from_secs(90),
            proxy_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Load configuration from the environment.
    ///
    /// The API key comes from the OS keyring (service `elevenlabs`, user
    /// `api_key`) and then `ELEVENLABS_API_KEY`. Base URL, timeout and proxy
    /// honour `ELEVENLABS_BASE_URL`, `ELEVENLABS_TIMEOUT_SECS` and
    /// `ELEVENLABS_PROXY_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = resolve_api_key(None)?;
        let mut config = Self::new(api_key);
        EnvOverrides::read().apply(&mut config);
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_key.is_blank() {
            return Err(Error::configuration_with_context(
                "API key must not be empty",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("config"),
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeout must be greater than zero",
                ErrorContext::new()
                    .with_field_path("timeout")
                    .with_source("config"),
            ));
        }
        Ok(())
    }
}

/// Resolve the API key: explicit value, then keyring, then environment.
pub(crate) fn resolve_api_key(explicit: Option<ApiKey>) -> Result<ApiKey> {
    if let Some(key) = explicit.filter(|k| !k.is_blank()) {
        return Ok(key);
    }

    if let Ok(entry) = Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        if let Ok(key) = entry.get_password() {
            let key = ApiKey::new(key);
            if !key.is_blank() {
                tracing::debug!("using API key from OS keyring");
                return Ok(key);
            }
        }
    }

    env_non_empty(API_KEY_ENV).map(ApiKey::new).ok_or_else(|| {
        Error::configuration_with_context(
            "API key required",
            ErrorContext::new()
                .with_field_path("api_key")
                .with_details(format!("set {} or pass a key explicitly", API_KEY_ENV))
                .with_source("config"),
        )
    })
}

/// Endpoint settings taken from `ELEVENLABS_*` variables.
///
/// Blank values and unparsable or zero timeouts are ignored, leaving the
/// defaults in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EnvOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub proxy_url: Option<String>,
}

impl EnvOverrides {
    pub(crate) fn read() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: non_empty(lookup(BASE_URL_ENV)),
            timeout_secs: parse_timeout_secs(lookup(TIMEOUT_SECS_ENV).as_deref()),
            proxy_url: non_empty(lookup(PROXY_URL_ENV)),
        }
    }

    fn apply(self, config: &mut ClientConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config.proxy_url = self.proxy_url;
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    non_empty(env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout_secs(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
