//! Discovery Engine search API types and client implementation.
//!
//! This module provides the wire types for the hosted search service's
//! `servingConfigs:search` endpoint and a client that forwards one query per
//! call with a fixed serving configuration.

use serde::{Deserialize, Serialize};

pub mod client;
pub use client::DiscoveryClient;

/// Results requested per call.
pub(crate) const PAGE_SIZE: u32 = 10;

/// Result documents covered by the generated summary.
pub(crate) const SUMMARY_RESULT_COUNT: u32 = 5;

/// Request body for a search call.
///
/// Everything except the query is fixed for the life of the process.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySearchRequest {
    /// The free-text query, already trimmed.
    pub query: String,
    /// Fixed at [`PAGE_SIZE`].
    pub page_size: u32,
    /// Query expansion mode; always automatic.
    pub query_expansion_spec: QueryExpansionSpec,
    /// Summary request covering the top results.
    pub content_search_spec: ContentSearchSpec,
}

impl DiscoverySearchRequest {
    /// Builds the fixed-shape request around a query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_size: PAGE_SIZE,
            query_expansion_spec: QueryExpansionSpec {
                condition: "AUTO".to_string(),
            },
            content_search_spec: ContentSearchSpec {
                summary_spec: SummarySpec {
                    summary_result_count: SUMMARY_RESULT_COUNT,
                },
            },
        }
    }
}

/// Query expansion configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExpansionSpec {
    /// Expansion condition, `"AUTO"` in every request this client sends.
    pub condition: String,
}

/// Content search configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchSpec {
    /// The summary request.
    pub summary_spec: SummarySpec,
}

/// Generated-summary configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySpec {
    /// How many result documents the summary may draw on.
    pub summary_result_count: u32,
}

/// Response body for a search call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySearchResponse {
    /// Ordered result items; bounded by the requested page size.
    #[serde(default)]
    pub results: Vec<DiscoveryResult>,
    /// Generated summary, when one was produced.
    #[serde(default)]
    pub summary: Option<DiscoverySummary>,
}

/// One raw result item.
///
/// The useful fields may live in either of two optional document projections
/// or inline on the item itself; see [`crate::normalize`] for the flattening
/// rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryResult {
    /// Result identifier assigned by the backend.
    #[serde(default)]
    pub id: Option<String>,
    /// The matched document.
    #[serde(default)]
    pub document: DiscoveryDocument,
    /// Inline snippet, when the backend surfaces one directly on the item.
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Document reference with its optional projections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryDocument {
    /// Full resource name of the document.
    #[serde(default)]
    pub name: Option<String>,
    /// Document identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Fields derived by the backend from the document content.
    #[serde(default)]
    pub derived_struct_data: Option<DerivedStructData>,
    /// Fields supplied with the document at ingestion time.
    #[serde(default)]
    pub struct_data: Option<StructData>,
}

/// The backend-derived projection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStructData {
    /// Extracted document title.
    #[serde(default)]
    pub title: Option<String>,
    /// Canonical link to the document.
    #[serde(default)]
    pub link: Option<String>,
    /// Alternative document URI, populated for some source types.
    #[serde(default)]
    pub uri: Option<String>,
}

/// The ingestion-time structured projection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructData {
    /// Snippet supplied with the document.
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Generated-summary payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySummary {
    /// The summary text; may be absent or empty.
    #[serde(default)]
    pub summary_text: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = DiscoverySearchRequest::new("library opening hours");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "query": "library opening hours",
                "pageSize": 10,
                "queryExpansionSpec": {"condition": "AUTO"},
                "contentSearchSpec": {"summarySpec": {"summaryResultCount": 5}}
            })
        );
    }

    #[test]
    fn test_parse_response_with_both_projections() {
        let body = r#"{
            "results": [{
                "id": "doc-1",
                "document": {
                    "name": "projects/p/locations/global/collections/default_collection/dataStores/d/branches/0/documents/doc-1",
                    "id": "doc-1",
                    "derivedStructData": {
                        "title": "Library Hours",
                        "link": "https://x/lib",
                        "extractive_answers": [{"content": "ignored"}]
                    },
                    "structData": {"snippet": "Open 9-5", "category": "facilities"}
                }
            }],
            "totalSize": 1,
            "attributionToken": "tok",
            "summary": {"summaryText": "The library is open 9-5."}
        }"#;

        let response: DiscoverySearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 1);

        let document = &response.results[0].document;
        let derived = document.derived_struct_data.as_ref().unwrap();
        assert_eq!(derived.title.as_deref(), Some("Library Hours"));
        assert_eq!(derived.link.as_deref(), Some("https://x/lib"));
        assert_eq!(
            document.struct_data.as_ref().unwrap().snippet.as_deref(),
            Some("Open 9-5")
        );
        assert_eq!(
            response.summary.unwrap().summary_text.as_deref(),
            Some("The library is open 9-5.")
        );
    }

    #[test]
    fn test_parse_empty_response() {
        let response: DiscoverySearchResponse = serde_json::from_str(r#"{"totalSize": 0}"#).unwrap();
        assert!(response.results.is_empty());
        assert!(response.summary.is_none());
    }
}

#[cfg(test)]
mod fuzz_tests {
    #![allow(clippy::unwrap_used)]

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn fuzz_response_parsing(data in prop::collection::vec(any::<u8>(), 0..1000)) {
            // Should not panic on malformed responses
            let _ = serde_json::from_slice::<DiscoverySearchResponse>(&data);
        }

        #[test]
        fn fuzz_response_with_partial_documents(
            title in prop::option::of(".*"),
            link in prop::option::of(".*"),
            has_derived in any::<bool>(),
        ) {
            let derived = if has_derived {
                let mut fields = Vec::new();
                if let Some(title) = &title {
                    fields.push(format!(
                        r#""title":{}"#,
                        serde_json::to_string(title).unwrap()
                    ));
                }
                if let Some(link) = &link {
                    fields.push(format!(
                        r#""link":{}"#,
                        serde_json::to_string(link).unwrap()
                    ));
                }
                format!(r#","derivedStructData":{{{}}}"#, fields.join(","))
            } else {
                String::new()
            };

            let json = format!(r#"{{"results":[{{"document":{{"id":"doc-1"{derived}}}}}]}}"#);

            let response = serde_json::from_str::<DiscoverySearchResponse>(&json).unwrap();
            prop_assert_eq!(response.results.len(), 1);
        }
    }
}
