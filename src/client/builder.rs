use crate::client::core::ElevenLabsClient;
use crate::config::{self, ApiKey, ClientConfig, EnvOverrides};
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Unset values fall back to the environment (see [`ClientConfig::from_env`])
/// and then to the library defaults.
pub struct ElevenLabsClientBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    proxy_url: Option<String>,
}

impl ElevenLabsClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: None,
            proxy_url: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL (primarily for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-call timeout. Streams must finish within it too, so leave room for long texts.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Resolve the final configuration without building a client.
    pub fn into_config(self) -> Result<ClientConfig> {
        self.resolve(EnvOverrides::read())
    }

    // Explicit builder values win over the environment.
    fn resolve(self, env: EnvOverrides) -> Result<ClientConfig> {
        let api_key = config::resolve_api_key(self.api_key)?;
        let mut cfg = ClientConfig::new(api_key);

        if let Some(url) = self.base_url.or(env.base_url) {
            cfg.base_url = url;
        }
        if let Some(secs) = self.timeout_secs.or(env.timeout_secs) {
            cfg.timeout = Duration::from_secs(secs);
        }
        cfg.proxy_url = self.proxy_url.or(env.proxy_url);
        Ok(cfg)
    }

    pub fn build(self) -> Result<ElevenLabsClient> {
        ElevenLabsClient::new(self.into_config()?)
    }
}

impl Default for ElevenLabsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
