//! Adapter trait and shared helpers

use crate::network::HttpClient;
use crate::results::{Item, Source};
use async_trait::async_trait;
use serde_json::Value;

/// One external search source normalized into the shared [`Item`] contract.
///
/// `search` is total: remote failure of any kind (rate limit, non-2xx,
/// transport error, malformed body) degrades to an empty sequence inside the
/// adapter. One slow or down source must never abort the other two, so no
/// adapter error ever crosses this boundary.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Adapter name used in logs
    fn name(&self) -> &str;

    /// Source variant stamped on every produced item
    fn source(&self) -> Source;

    /// Search the source, absorbing its failure modes
    async fn search(&self, client: &HttpClient, query: &str) -> Vec<Item>;
}

/// Non-empty string field lookup on a raw JSON record.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// String-array field lookup, skipping non-string and empty entries.
pub(crate) fn str_array_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_field_rejects_empty() {
        let value = json!({"a": "x", "b": "", "c": 3});
        assert_eq!(str_field(&value, "a"), Some("x"));
        assert_eq!(str_field(&value, "b"), None);
        assert_eq!(str_field(&value, "c"), None);
        assert_eq!(str_field(&value, "missing"), None);
    }

    #[test]
    fn test_str_array_field_skips_non_strings() {
        let value = json!({"tags": ["nlp", "", 7, "vision"]});
        assert_eq!(str_array_field(&value, "tags"), vec!["nlp", "vision"]);
        assert!(str_array_field(&value, "missing").is_empty());
    }
}
