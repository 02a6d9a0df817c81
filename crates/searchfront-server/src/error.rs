//! Error responses for the HTTP surface.
//!
//! Input errors and upstream failures map to distinct statuses; upstream
//! detail is logged server-side and never leaked to the browser.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use searchfront_client::ClientError;

/// JSON error body returned to the browser.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request carried no usable query.
    #[error("Missing query")]
    MissingQuery,

    /// The outbound search call failed.
    #[error("upstream search error: {0}")]
    Upstream(ClientError),

    /// Startup configuration problem; fatal at boot.
    #[error("configuration error: {0}")]
    Config(String),

    /// Anything that should have been impossible after boot validation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ClientError> for ServerError {
    fn from(err: ClientError) -> Self {
        if err.is_client_input() {
            Self::MissingQuery
        } else {
            Self::Upstream(err)
        }
    }
}

impl ServerError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingQuery => "Missing query".to_string(),
            Self::Upstream(err) => upstream_message(err).to_string(),
            Self::Config(_) | Self::Internal(_) => "internal server error".to_string(),
        }
    }
}

// Client-visible wording per upstream failure class. Raw upstream detail
// stays in the logs.
fn upstream_message(err: &ClientError) -> &'static str {
    match err {
        ClientError::TimeoutError => "search backend timed out",
        ClientError::AuthenticationError(_) => "search backend rejected our credentials",
        ClientError::QuotaExceeded(_) => "search backend quota exceeded, try again later",
        _ => "search backend request failed",
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::MissingQuery => {}
            Self::Upstream(err) => tracing::error!("search backend call failed: {err}"),
            Self::Config(detail) | Self::Internal(detail) => tracing::error!("{detail}"),
        }

        (
            self.status(),
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
