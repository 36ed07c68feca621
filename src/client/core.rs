use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::sync::Arc;

/// Client for the ElevenLabs HTTP API.
///
/// Cloning is cheap and clones share one connection pool. Configuration is
/// fixed at construction, so a client can be used from many tasks at once.
#[derive(Clone)]
pub struct ElevenLabsClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl ElevenLabsClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        tracing::debug!(base_url = %transport.base_url(), "ElevenLabs client ready");
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Create a client from [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn builder() -> super::ElevenLabsClientBuilder {
        super::ElevenLabsClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }
}

impl fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.base_url())
            .finish_non_exhaustive()
    }
}

/// Reject blank identifiers before they turn into a malformed path.
///
/// Identifiers are opaque: anything else is passed through untouched.
pub(crate) fn require_id<'a>(field: &str, id: &'a str) -> Result<&'a str> {
    if id.trim().is_empty() {
        return Err(Error::validation_with_context(
            format!("{} must not be empty", field),
            ErrorContext::new().with_field_path(field),
        ));
    }
    Ok(id)
}
