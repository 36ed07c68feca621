//! Classification of remote API failures.
//!
//! The service reports errors through the HTTP status and, for most
//! endpoints, a `detail.status` string such as `"invalid_api_key"` or
//! `"voice_not_found"`. Both are mapped onto [`RemoteErrorKind`] so callers
//! can branch on the kind instead of matching raw codes.
//!
//! | Status | Kind               |
//! |--------|--------------------|
//! | 400    | `InvalidRequest`   |
//! | 401    | `Authentication`   |
//! | 403    | `PermissionDenied` |
//! | 404    | `NotFound`         |
//! | 422    | `Validation`       |
//! | 429    | `RateLimited`      |
//! | 5xx    | `ServerError`      |
//!
//! ## Example
//!
//! ```rust
//! use elevenlabs_lib_rust::error_code::RemoteErrorKind;
//!
//! let kind = RemoteErrorKind::from_http_status(429);
//! assert_eq!(kind.name(), "rate_limited");
//! assert_eq!(kind.category(), "rate");
//! ```

use std::fmt;

/// Kind of a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorKind {
    /// Malformed request or unsupported parameters
    InvalidRequest,
    /// Missing or invalid `xi-api-key`
    Authentication,
    /// Valid key without access to the resource
    PermissionDenied,
    /// Voice, model or history item does not exist
    NotFound,
    /// Request body failed schema validation (HTTP 422)
    Validation,
    /// Character quota of the subscription exhausted
    QuotaExceeded,
    /// Too many concurrent or per-minute requests
    RateLimited,
    /// Internal error on the service side
    ServerError,
    /// Status could not be classified
    Unknown,
}

impl RemoteErrorKind {
    /// Returns the standard name (e.g., `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::QuotaExceeded => "quota_exceeded",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"` or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::Validation => "client",
            Self::QuotaExceeded | Self::RateLimited => "rate",
            Self::ServerError => "server",
            Self::Unknown => "unknown",
        }
    }

    /// Maps an HTTP status code to the most likely kind.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            422 => Self::Validation,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Maps the service's `detail.status` string to a kind.
    ///
    /// Returns `None` for unrecognised values so the HTTP status decides.
    pub fn from_detail_status(detail_status: &str) -> Option<Self> {
        let kind = match detail_status {
            "invalid_api_key" | "needs_authorization" | "missing_api_key" => Self::Authentication,
            "quota_exceeded" | "insufficient_credits" => Self::QuotaExceeded,
            "too_many_concurrent_requests" | "system_busy" | "rate_limit_exceeded" => {
                Self::RateLimited
            }
            "voice_not_found" | "history_item_not_found" | "model_not_found" => Self::NotFound,
            "permission_denied" | "detected_unusual_activity" => Self::PermissionDenied,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
