//! Request body construction
//!
//! Bodies are built from a copy of the caller's parameter map; the caller's
//! map is never touched.

use crate::error::SearchError;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Caller-supplied key/value pairs merged into every request body
pub type SearchParameters = HashMap<String, String>;

pub(crate) const TEXT: &str = "text";
pub(crate) const REQUEST_ID: &str = "requestId";
pub(crate) const DETECTOR_DESCRIPTION: &str = "detector_description";
pub(crate) const DETECTOR_UTTERANCES: &str = "detector_utterances";

/// JSON object sent as a search request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    /// Start a body from the caller's parameters
    pub fn from_parameters(parameters: &SearchParameters) -> Self {
        let fields = parameters
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Self { fields }
    }

    /// Add a call-specific field, refusing to overwrite a caller key
    pub fn insert(&mut self, key: &str, value: Value) -> Result<(), SearchError> {
        if self.fields.contains_key(key) {
            return Err(SearchError::DuplicateParameter(key.to_string()));
        }
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    /// Field lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields, caller keys included
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the body has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Body for a detector search: `text` plus `requestId`, which falls back to
/// an empty string when absent
pub fn detectors_body(
    request_id: Option<&str>,
    query: &str,
    parameters: &SearchParameters,
) -> Result<RequestBody, SearchError> {
    let mut body = RequestBody::from_parameters(parameters);
    body.insert(TEXT, Value::from(query))?;
    body.insert(REQUEST_ID, Value::from(request_id.unwrap_or_default()))?;
    Ok(body)
}

/// Body for utterance matching
///
/// `detector_utterances` carries the utterances as a JSON-encoded string, not
/// a nested array. An absent `requestId` is sent as `null`, unlike
/// [`detectors_body`].
pub fn utterances_body(
    request_id: Option<&str>,
    query: &str,
    detector_utterances: &[String],
    parameters: &SearchParameters,
) -> Result<RequestBody, SearchError> {
    let encoded = serde_json::to_string(detector_utterances)?;

    let mut body = RequestBody::from_parameters(parameters);
    body.insert(DETECTOR_DESCRIPTION, Value::from(query))?;
    body.insert(DETECTOR_UTTERANCES, Value::from(encoded))?;
    body.insert(REQUEST_ID, request_id.map_or(Value::Null, Value::from))?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> SearchParameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_detectors_body() {
        let body = detectors_body(Some("req-1"), "disk full", &SearchParameters::new()).unwrap();
        assert_eq!(
            Value::Object(body.as_map().clone()),
            json!({"text": "disk full", "requestId": "req-1"})
        );
    }

    #[test]
    fn test_call_fields_keep_insertion_order() {
        let body = detectors_body(Some("req-1"), "disk full", &SearchParameters::new()).unwrap();
        assert_eq!(
            serde_json::to_string(body.as_map()).unwrap(),
            r#"{"text":"disk full","requestId":"req-1"}"#
        );

        let utterances = vec!["cpu spike".to_string()];
        let body = utterances_body(None, "high cpu", &utterances, &SearchParameters::new()).unwrap();
        assert_eq!(
            serde_json::to_string(body.as_map()).unwrap(),
            r#"{"detector_description":"high cpu","detector_utterances":"[\"cpu spike\"]","requestId":null}"#
        );
    }

    #[test]
    fn test_detectors_body_keeps_caller_keys() {
        let caller = params(&[("productId", "14748"), ("startTime", "2024-01-01")]);
        let body = detectors_body(Some("req-2"), "slow app", &caller).unwrap();

        assert_eq!(body.len(), caller.len() + 2);
        assert_eq!(body.get("productId"), Some(&json!("14748")));
        assert_eq!(body.get("startTime"), Some(&json!("2024-01-01")));
        // caller map is left as it was
        assert_eq!(caller.len(), 2);
        assert!(!caller.contains_key(TEXT));
    }

    #[test]
    fn test_detectors_body_missing_request_id_is_empty_string() {
        let body = detectors_body(None, "disk full", &SearchParameters::new()).unwrap();
        assert_eq!(body.get(REQUEST_ID), Some(&json!("")));
    }

    #[test]
    fn test_utterances_body() {
        let utterances = vec!["cpu is high".to_string(), "cpu spike".to_string()];
        let body = utterances_body(None, "high cpu", &utterances, &SearchParameters::new()).unwrap();

        assert_eq!(body.get(DETECTOR_DESCRIPTION), Some(&json!("high cpu")));
        assert_eq!(
            body.get(DETECTOR_UTTERANCES),
            Some(&json!("[\"cpu is high\",\"cpu spike\"]"))
        );
        // no empty-string fallback here
        assert_eq!(body.get(REQUEST_ID), Some(&Value::Null));
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_utterances_body_empty_list() {
        let body = utterances_body(Some("req-3"), "q", &[], &SearchParameters::new()).unwrap();
        assert_eq!(body.get(DETECTOR_UTTERANCES), Some(&json!("[]")));
        assert_eq!(body.get(REQUEST_ID), Some(&json!("req-3")));
    }

    #[test]
    fn test_colliding_key_is_rejected() {
        let caller = params(&[("text", "already here")]);
        let err = detectors_body(Some("req-4"), "disk full", &caller).unwrap_err();
        assert!(matches!(err, SearchError::DuplicateParameter(ref key) if key == "text"));

        let caller = params(&[("requestId", "other")]);
        assert!(utterances_body(None, "q", &[], &caller).is_err());
    }
}
