//! The simplified search contract returned to the browser client.

use serde::{Deserialize, Serialize};

/// A single normalized search hit.
///
/// Every field is always a present, non-null string: missing source data is
/// defaulted during normalization so the browser never has to null-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document title, `"Untitled"` when the backend provided none.
    pub title: String,
    /// Snippet text, empty when the backend provided none.
    pub snippet: String,
    /// Document link, `"#"` when the backend provided none.
    pub uri: String,
}

/// Response body for a proxied search call.
///
/// `results` preserves backend order. `summary` serializes as JSON `null`
/// when absent; the field is never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Normalized hits, in the order the backend returned them.
    pub results: Vec<SearchResult>,
    /// Generated summary covering the top results, when the backend
    /// produced a non-empty one.
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_empty_response_shape() {
        let response = SearchResponse::default();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"results":[],"summary":null}"#);
    }

    #[test]
    fn test_populated_response_shape() {
        let response = SearchResponse {
            results: vec![SearchResult {
                title: "Library Hours".to_string(),
                snippet: "Open 9-5".to_string(),
                uri: "https://x/lib".to_string(),
            }],
            summary: Some("The library is open 9-5.".to_string()),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "results": [
                    {"title": "Library Hours", "snippet": "Open 9-5", "uri": "https://x/lib"}
                ],
                "summary": "The library is open 9-5."
            })
        );
    }

    #[test]
    fn test_results_order_is_preserved() {
        let json = r##"{"results":[
            {"title":"b","snippet":"","uri":"#"},
            {"title":"a","snippet":"","uri":"#"}
        ],"summary":null}"##;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results[0].title, "b");
        assert_eq!(response.results[1].title, "a");
    }
}
