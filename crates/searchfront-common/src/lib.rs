//! # searchfront-common
//!
//! Shared types for the searchfront front end: the simplified search contract
//! returned to the browser client, and the service-account credential material
//! used to sign widget tokens.
//!
//! ## Example
//!
//! ```
//! use searchfront_common::{SearchResponse, SearchResult};
//!
//! let response = SearchResponse {
//!     results: vec![SearchResult {
//!         title: "Library Hours".to_string(),
//!         snippet: "Open 9-5".to_string(),
//!         uri: "https://example.edu/library".to_string(),
//!     }],
//!     summary: None,
//! };
//!
//! // `summary` serializes as an explicit `null`, never an omitted field.
//! let json = serde_json::to_string(&response)?;
//! assert!(json.ends_with(r#""summary":null}"#));
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Service-account credential material.
pub mod credentials;
/// The simplified search contract returned to the browser.
pub mod search;

pub use credentials::ServiceAccountKey;
pub use search::{SearchResponse, SearchResult};
