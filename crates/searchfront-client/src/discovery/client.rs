//! Hosted search backend client.
//!
//! One synchronous outbound call per search, against a serving-config path
//! that is fixed for the life of the client. Calls carry a bounded timeout
//! and are never retried; failures map to the [`ClientError`] taxonomy so
//! the HTTP layer can distinguish input errors from upstream ones.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client;

use searchfront_common::SearchResponse;

use crate::SearchBackend;
use crate::discovery::{DiscoverySearchRequest, DiscoverySearchResponse};
use crate::error::{ApiErrorResponse, ClientError};
use crate::normalize::normalize_response;
use crate::token::TokenIssuer;

/// Production endpoint of the hosted search service.
const DEFAULT_BASE_URL: &str = "https://discoveryengine.googleapis.com";

/// Audience for the self-signed assertions presented on outbound calls.
const DISCOVERY_AUDIENCE: &str = "https://discoveryengine.googleapis.com/";

/// Bound on the single outbound call per search.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the hosted enterprise search backend.
///
/// Holds the serving-config resource path derived from deployment
/// configuration; the path never varies across calls.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    client: Client,
    base_url: String,
    serving_config: String,
    issuer: Arc<TokenIssuer>,
}

impl DiscoveryClient {
    /// Creates a client for one project/location/data-store triple.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NetworkError`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        project_id: &str,
        location: &str,
        data_store_id: &str,
        issuer: Arc<TokenIssuer>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            serving_config: serving_config_path(project_id, location, data_store_id),
            issuer,
        })
    }

    /// Overrides the service endpoint, for tests and private deployments.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The fixed serving-config path this client queries.
    #[must_use]
    pub fn serving_config(&self) -> &str {
        &self.serving_config
    }
}

/// Builds the fixed serving-config resource path.
fn serving_config_path(project_id: &str, location: &str, data_store_id: &str) -> String {
    format!(
        "projects/{project_id}/locations/{location}/collections/default_collection/dataStores/{data_store_id}/servingConfigs/default_config"
    )
}

#[async_trait]
impl SearchBackend for DiscoveryClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::InvalidQuery);
        }

        let url = format!("{}/v1/{}:search", self.base_url, self.serving_config);
        let body = DiscoverySearchRequest::new(query);
        let token = self.issuer.issue_for(DISCOVERY_AUDIENCE)?;

        debug!("forwarding search to {}", self.serving_config);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::TimeoutError
                } else {
                    ClientError::NetworkError(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.map_err(|e| {
                warn!("failed to read error response body: {e}");
                ClientError::NetworkError(e)
            })?;

            // Extract the message from the structured error body, or fall
            // back to the raw text.
            let message = match serde_json::from_str::<ApiErrorResponse>(&error_text) {
                Ok(parsed) => parsed.error.message,
                Err(_) => error_text,
            };

            error!(
                "search request failed with status {}: {message}",
                status.as_u16()
            );

            return Err(match status.as_u16() {
                401 | 403 => ClientError::AuthenticationError(message),
                429 => ClientError::QuotaExceeded(message),
                status => ClientError::UpstreamError { status, message },
            });
        }

        let response_text = response.text().await?;
        let parsed: DiscoverySearchResponse = serde_json::from_str(&response_text)?;

        Ok(normalize_response(&parsed))
    }
}
