//! # searchfront-client
//!
//! Outbound side of the searchfront front end. This crate provides:
//!
//! - [`TokenIssuer`]: mints short-lived RS256-signed assertions for the
//!   embeddable search widget from a service-account key.
//! - [`DiscoveryClient`]: forwards free-text queries to the hosted enterprise
//!   search backend and normalizes heterogeneous result shapes into the
//!   simplified contract in [`searchfront_common`].
//!
//! The normalization rules live in [`normalize`] as a pure function, isolated
//! from the network layer so they can be tested without a backend.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use searchfront_client::{DiscoveryClient, SearchBackend, TokenIssuer};
//! use searchfront_common::ServiceAccountKey;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let key = ServiceAccountKey::from_path("key.json".as_ref())?;
//! let issuer = Arc::new(TokenIssuer::new(&key)?);
//!
//! let client = DiscoveryClient::new("my-project", "global", "my-store", issuer)?;
//! let response = client.search("library opening hours").await?;
//! println!("{} results", response.results.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use searchfront_common::SearchResponse;

pub mod discovery;
pub mod error;
pub mod normalize;
pub mod token;

pub use discovery::DiscoveryClient;
pub use error::ClientError;
pub use token::TokenIssuer;

/// Interface to the hosted search backend.
///
/// Implementations must be thread-safe; the server shares a single instance
/// across concurrent requests with no further coordination.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Forwards one free-text query and returns the normalized response.
    ///
    /// The query is trimmed first; result order matches the backend's.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidQuery`] for empty or whitespace-only
    /// queries, in which case no outbound call is made. Upstream failures map
    /// to the rest of the [`ClientError`] taxonomy and are never retried.
    async fn search(&self, query: &str) -> Result<SearchResponse, ClientError>;
}
