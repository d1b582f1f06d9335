//! The response envelope every Coinbase payload is wrapped in

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort order of a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Cursor metadata attached to collection responses
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size
    #[serde(default)]
    pub limit: u32,
    /// Sort order
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub ending_before: Option<String>,
    #[serde(default)]
    pub starting_after: Option<String>,
    #[serde(default)]
    pub previous_uri: Option<String>,
    /// Continuation cursor; present only when more pages exist
    #[serde(default)]
    pub next_uri: Option<String>,
}

impl Pagination {
    /// The continuation cursor, if another page exists.
    ///
    /// An empty `next_uri` is treated the same as a missing one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_uri.as_deref().filter(|uri| !uri.is_empty())
    }

    /// Check if more pages exist
    pub fn has_next(&self) -> bool {
        self.next_cursor().is_some()
    }
}

/// Standard Coinbase response wrapper: `{ data, pagination?, error? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Payload (absent on failure)
    #[serde(default)]
    pub data: Option<T>,
    /// Present on collection endpoints
    #[serde(default)]
    pub pagination: Option<Pagination>,
    /// Present (and truthy) on failure
    #[serde(default)]
    pub error: Option<Value>,
}

impl<T> Envelope<T> {
    /// The error carried by the envelope, if it is truthy
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().and_then(error_text)
    }

    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.error_message().is_none()
    }
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of an `error` value when it is truthy.
///
/// Strings are returned verbatim, anything else as compact JSON.
pub fn error_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    Some(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_pagination() {
        let envelope: Envelope<Vec<Value>> = serde_json::from_value(json!({
            "pagination": {
                "ending_before": null,
                "starting_after": null,
                "limit": 25,
                "order": "desc",
                "previous_uri": null,
                "next_uri": "/v2/accounts?&limit=25&starting_after=5d5aed5f"
            },
            "data": [{"id": "a"}]
        }))
        .unwrap();

        let pagination = envelope.pagination.as_ref().unwrap();
        assert_eq!(pagination.limit, 25);
        assert_eq!(pagination.order, SortOrder::Desc);
        assert!(pagination.has_next());
        assert_eq!(envelope.data.unwrap().len(), 1);
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_empty_pagination_object() {
        let envelope: Envelope<Value> =
            serde_json::from_value(json!({"pagination": {}})).unwrap();
        let pagination = envelope.pagination.unwrap();
        assert!(!pagination.has_next());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_empty_next_uri_is_terminal() {
        let pagination = Pagination {
            next_uri: Some(String::new()),
            ..Pagination::default()
        };
        assert!(!pagination.has_next());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
    }

    #[test]
    fn test_error_text() {
        assert_eq!(error_text(&json!("boom")).as_deref(), Some("boom"));
        assert_eq!(
            error_text(&json!({"id": "not_found"})).as_deref(),
            Some(r#"{"id":"not_found"}"#)
        );
        assert_eq!(error_text(&json!("")), None);

        let envelope: Envelope<Value> =
            serde_json::from_value(json!({"data": {"id": 1}, "error": "nope"})).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.error_message().as_deref(), Some("nope"));
    }
}
