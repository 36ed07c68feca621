use crate::config::ClientConfig;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use futures::StreamExt;
use reqwest::{Method, Proxy, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};
use url::Url;

/// Header carrying the credential on every request.
pub const API_KEY_HEADER: &str = "xi-api-key";

#[derive(Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: crate::config::ApiKey,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(config.base_url.clone())
                    .with_source("transport"),
            )
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "base URL must be an http(s) URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(config.base_url.clone())
                    .with_source("transport"),
            ));
        }

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Some(config.pool_idle_timeout))
            .user_agent(concat!("elevenlabs-lib-rust/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_source("transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                Error::configuration_with_context(
                    "base URL cannot carry a path",
                    ErrorContext::new().with_field_path("base_url"),
                )
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Start a request with the credential attached.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(method = %method, path = url.path(), "outbound request");
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, self.api_key.expose())
    }

    /// Send a request and fail on non-success statuses.
    ///
    /// Error bodies are small, so they are read in full before failing.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.text().await?;
        warn!(status = status.as_u16(), path = %path, "remote service returned an error");
        Err(Error::remote(status.as_u16(), body))
    }

    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn send_bytes(&self, request: RequestBuilder) -> Result<Bytes> {
        let response = self.send(request).await?;
        Ok(response.bytes().await?)
    }

    /// Send a request and discard the (successful) response body.
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }

    /// Copy a response body into `sink` chunk by chunk.
    ///
    /// Returns the number of bytes written. The sink is flushed but never shut
    /// down; its lifecycle belongs to the caller.
    pub async fn stream_to<W>(&self, request: RequestBuilder, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let response = self.send(request).await?;
        let mut body = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| Error::stream(written, Error::Transport(e)))?;
            write_counted(sink, &chunk, &mut written).await?;
        }
        sink.flush()
            .await
            .map_err(|e| Error::stream(written, Error::Io(e)))?;

        info!(bytes = written, "audio stream finished");
        Ok(written)
    }
}

/// Write `chunk` into `sink`, adding every accepted byte to `written`.
///
/// Partial writes count, so a failing sink reports exactly what it took.
async fn write_counted<W>(sink: &mut W, chunk: &[u8], written: &mut u64) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut offset = 0;
    while offset < chunk.len() {
        let n = sink
            .write(&chunk[offset..])
            .await
            .map_err(|e| Error::stream(*written, Error::Io(e)))?;
        if n == 0 {
            return Err(Error::stream(
                *written,
                Error::Io(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "sink accepted no bytes",
                )),
            ));
        }
        offset += n;
        *written += n as u64;
    }
    Ok(())
}
