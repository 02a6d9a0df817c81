//! Normalization of heterogeneous backend result shapes.
//!
//! The backend returns documents whose useful fields may live in either of
//! two optional projections or inline on the result itself. This module
//! flattens every raw item into the fixed three-field contract, independent
//! of the network layer.
//!
//! Field resolution, in priority order:
//!
//! - **title**: derived projection's `title` if the field is present,
//!   otherwise `"Untitled"`. There is intentionally no fallback to the
//!   structured projection; see the repository design notes.
//! - **uri**: derived projection's `link` if present and non-empty, else its
//!   `uri` if present, otherwise `"#"`.
//! - **snippet**: inline snippet on the result if present; else the
//!   structured projection's `snippet` (empty string when the projection
//!   exists without one); otherwise empty.

use searchfront_common::{SearchResponse, SearchResult};

use crate::discovery::{DiscoveryResult, DiscoverySearchResponse};

/// Title used when the backend derived none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Link used when the backend provided none.
pub const DEFAULT_URI: &str = "#";

/// Flattens one raw result item into the simplified contract.
///
/// Every output field is a non-null string regardless of which projections
/// the raw item carried.
#[must_use]
pub fn normalize_result(raw: &DiscoveryResult) -> SearchResult {
    let derived = raw.document.derived_struct_data.as_ref();

    let title = derived
        .and_then(|d| d.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // An empty `link` falls through to the `uri` field.
    let uri = derived
        .and_then(|d| {
            d.link
                .clone()
                .filter(|link| !link.is_empty())
                .or_else(|| d.uri.clone())
        })
        .unwrap_or_else(|| DEFAULT_URI.to_string());

    let snippet = raw
        .snippet
        .clone()
        .or_else(|| {
            raw.document
                .struct_data
                .as_ref()
                .map(|s| s.snippet.clone().unwrap_or_default())
        })
        .unwrap_or_default();

    SearchResult {
        title,
        snippet,
        uri,
    }
}

/// Normalizes a full backend response, preserving result order.
///
/// The summary is surfaced verbatim when non-empty and dropped otherwise.
#[must_use]
pub fn normalize_response(response: &DiscoverySearchResponse) -> SearchResponse {
    let results = response.results.iter().map(normalize_result).collect();

    let summary = response
        .summary
        .as_ref()
        .and_then(|s| s.summary_text.clone())
        .filter(|text| !text.is_empty());

    SearchResponse { results, summary }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use crate::discovery::{
        DerivedStructData, DiscoveryDocument, DiscoveryResult, DiscoverySummary, StructData,
    };

    use super::*;

    fn item_with(
        derived: Option<DerivedStructData>,
        structured: Option<StructData>,
        snippet: Option<&str>,
    ) -> DiscoveryResult {
        DiscoveryResult {
            id: Some("doc-1".to_string()),
            document: DiscoveryDocument {
                name: None,
                id: Some("doc-1".to_string()),
                derived_struct_data: derived,
                struct_data: structured,
            },
            snippet: snippet.map(str::to_string),
        }
    }

    #[test]
    fn test_item_without_projections_gets_all_defaults() {
        let normalized = normalize_result(&item_with(None, None, None));
        assert_eq!(
            normalized,
            SearchResult {
                title: "Untitled".to_string(),
                snippet: String::new(),
                uri: "#".to_string(),
            }
        );
    }

    #[test]
    fn test_derived_title_wins_regardless_of_structured_content() {
        let normalized = normalize_result(&item_with(
            Some(DerivedStructData {
                title: Some("Foo".to_string()),
                link: None,
                uri: None,
            }),
            Some(StructData {
                snippet: Some("structured snippet".to_string()),
            }),
            None,
        ));
        assert_eq!(normalized.title, "Foo");
    }

    #[test]
    fn test_title_has_no_structured_fallback() {
        // The structured projection alone never contributes a title.
        let normalized = normalize_result(&item_with(
            None,
            Some(StructData {
                snippet: Some("whatever".to_string()),
            }),
            None,
        ));
        assert_eq!(normalized.title, "Untitled");
    }

    #[test]
    fn test_link_preferred_over_uri() {
        let normalized = normalize_result(&item_with(
            Some(DerivedStructData {
                title: None,
                link: Some("https://x/link".to_string()),
                uri: Some("https://x/uri".to_string()),
            }),
            None,
            None,
        ));
        assert_eq!(normalized.uri, "https://x/link");
    }

    #[test]
    fn test_empty_link_falls_through_to_uri() {
        let normalized = normalize_result(&item_with(
            Some(DerivedStructData {
                title: None,
                link: Some(String::new()),
                uri: Some("https://x/uri".to_string()),
            }),
            None,
            None,
        ));
        assert_eq!(normalized.uri, "https://x/uri");
    }

    #[test]
    fn test_inline_snippet_wins_over_structured() {
        let normalized = normalize_result(&item_with(
            None,
            Some(StructData {
                snippet: Some("structured".to_string()),
            }),
            Some("inline"),
        ));
        assert_eq!(normalized.snippet, "inline");
    }

    #[test]
    fn test_structured_snippet_used_when_no_inline() {
        let normalized = normalize_result(&item_with(
            None,
            Some(StructData {
                snippet: Some("Open 9-5".to_string()),
            }),
            None,
        ));
        assert_eq!(normalized.snippet, "Open 9-5");
    }

    #[test]
    fn test_structured_projection_without_snippet_defaults_empty() {
        let normalized = normalize_result(&item_with(None, Some(StructData { snippet: None }), None));
        assert_eq!(normalized.snippet, "");
    }

    #[test]
    fn test_response_preserves_backend_order() {
        let response = DiscoverySearchResponse {
            results: vec![
                item_with(
                    Some(DerivedStructData {
                        title: Some("second-ranked".to_string()),
                        link: None,
                        uri: None,
                    }),
                    None,
                    None,
                ),
                item_with(
                    Some(DerivedStructData {
                        title: Some("first-ranked".to_string()),
                        link: None,
                        uri: None,
                    }),
                    None,
                    None,
                ),
            ],
            summary: None,
        };

        let normalized = normalize_response(&response);
        assert_eq!(normalized.results[0].title, "second-ranked");
        assert_eq!(normalized.results[1].title, "first-ranked");
    }

    #[test]
    fn test_empty_summary_is_dropped() {
        let response = DiscoverySearchResponse {
            results: vec![],
            summary: Some(DiscoverySummary {
                summary_text: Some(String::new()),
            }),
        };
        assert_eq!(normalize_response(&response).summary, None);
    }

    #[test]
    fn test_summary_surfaced_verbatim() {
        let response = DiscoverySearchResponse {
            results: vec![],
            summary: Some(DiscoverySummary {
                summary_text: Some("Opening hours vary by campus.".to_string()),
            }),
        };
        assert_eq!(
            normalize_response(&response).summary.as_deref(),
            Some("Opening hours vary by campus.")
        );
    }
}
