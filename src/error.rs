use crate::error_code::RemoteErrorKind;
use serde::Deserialize;
use thiserror::Error;

/// Structured error context for configuration and validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "base_url", "history.page_size")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "config", "tts")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the client.
///
/// Every operation surfaces the first error it meets; nothing is retried locally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("Remote error: HTTP {status} ({kind}): {message}")]
    Remote {
        status: u16,
        kind: RemoteErrorKind,
        message: String,
        /// Raw response body as returned by the service.
        body: String,
    },

    /// An audio stream failed after the response started.
    ///
    /// `bytes_written` counts the bytes fully delivered to the sink; a value of
    /// zero means the sink received nothing.
    #[error("Audio stream interrupted after {bytes_written} bytes: {source}")]
    Stream {
        bytes_written: u64,
        source: Box<Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub(crate) fn stream(bytes_written: u64, source: Error) -> Self {
        Error::Stream {
            bytes_written,
            source: Box::new(source),
        }
    }

    /// Build a remote error from a non-success status and the raw response body.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let parsed = serde_json::from_str::<RemoteErrorBody>(&body).ok();

        let detail_status = parsed.as_ref().and_then(|p| match &p.detail {
            RemoteDetail::Api { status, .. } => status.clone(),
            _ => None,
        });
        let kind = detail_status
            .as_deref()
            .and_then(RemoteErrorKind::from_detail_status)
            .unwrap_or_else(|| RemoteErrorKind::from_http_status(status));

        let message = parsed
            .and_then(|p| p.detail.into_message())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    reqwest::StatusCode::from_u16(status)
                        .ok()
                        .and_then(|s| s.canonical_reason())
                        .unwrap_or("no error details")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });

        Error::Remote {
            status,
            kind,
            message,
            body,
        }
    }

    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            Error::Stream { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Classification of a remote error, if this is one.
    pub fn remote_kind(&self) -> Option<RemoteErrorKind> {
        match self {
            Error::Remote { kind, .. } => Some(*kind),
            Error::Stream { source, .. } => source.remote_kind(),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

/// Error payload shapes returned by the service.
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    detail: RemoteDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteDetail {
    // 422 responses carry a list of field errors
    Validation(Vec<ValidationDetail>),
    Api {
        status: Option<String>,
        message: Option<String>,
    },
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ValidationDetail {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

impl RemoteDetail {
    fn into_message(self) -> Option<String> {
        match self {
            RemoteDetail::Api { status, message } => message.or(status),
            RemoteDetail::Validation(items) if !items.is_empty() => Some(
                items
                    .iter()
                    .map(|item| {
                        let loc = item
                            .loc
                            .iter()
                            .map(|v| match v {
                                serde_json::Value::String(s) => s.clone(),
                                other => other.to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(".");
                        if loc.is_empty() {
                            item.msg.clone()
                        } else {
                            format!("{}: {}", loc, item.msg)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            RemoteDetail::Validation(_) => None,
            RemoteDetail::Text(text) => Some(text),
        }
    }
}
