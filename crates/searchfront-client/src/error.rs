//! Error types for the client library.

use serde::Deserialize;
use thiserror::Error;

/// Error response body returned by the hosted search service.
///
/// Wraps the detailed error object Google APIs return on non-success
/// statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// The error detail object from the API.
    pub error: ApiErrorDetail,
}

/// Detailed error information from the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric status code echoed in the body.
    #[serde(default)]
    pub code: Option<u16>,
    /// The error message text describing what went wrong.
    pub message: String,
    /// Canonical status name, e.g. `PERMISSION_DENIED`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Errors that can occur when issuing tokens or forwarding searches.
///
/// The taxonomy distinguishes caller input problems from upstream failures so
/// the HTTP layer can map them to different status codes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The query was empty or whitespace-only after trimming.
    ///
    /// No outbound call is made when this is returned.
    #[error("query must not be empty")]
    InvalidQuery,

    /// Network or HTTP transport failure.
    ///
    /// DNS resolution, connection failures, or socket errors on the single
    /// outbound call. Not retried.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The outbound call exceeded its bounded timeout.
    #[error("upstream request timed out")]
    TimeoutError,

    /// Upstream rejected the request's credentials (HTTP 401/403).
    #[error("authentication error: {0}")]
    AuthenticationError(String),

    /// Upstream quota or rate limit exhausted (HTTP 429).
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other non-success upstream status.
    #[error("upstream error ({status}): {message}")]
    UpstreamError {
        /// HTTP status returned by the upstream service.
        status: u16,
        /// Message extracted from the error body, or the raw body text.
        message: String,
    },

    /// A request or response body could not be encoded or decoded.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid configuration, including unparseable key material.
    ///
    /// Surfaced during startup validation, never on a request path.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// Signing an assertion failed despite valid key material.
    #[error("signing error: {0}")]
    SigningError(String),
}

impl ClientError {
    /// True when the failure was caused by the caller's input rather than
    /// the upstream service or this process's configuration.
    #[must_use]
    pub const fn is_client_input(&self) -> bool {
        matches!(self, Self::InvalidQuery)
    }

    /// True when the failure originated upstream of this process.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::NetworkError(_)
                | Self::TimeoutError
                | Self::AuthenticationError(_)
                | Self::QuotaExceeded(_)
                | Self::UpstreamError { .. }
        )
    }
}
