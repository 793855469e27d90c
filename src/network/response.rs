//! Raw response handed back to search callers

use bytes::Bytes;
use reqwest::header::HeaderMap;
use std::borrow::Cow;

/// HTTP response from the search API, captured verbatim
///
/// The client never inspects the status or parses the body; interpreting
/// both is the caller's job. Body bytes and every header value are kept
/// exactly as received.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, repeated names included
    pub headers: HeaderMap,
    /// Undecoded response body
    pub body: Bytes,
    /// Response URL (after redirects)
    pub url: String,
}

impl SearchResponse {
    /// Body as UTF-8 text, with invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of a header, if it is visible ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Every raw value sent under a header name, in order
    pub fn header_values(&self, name: &str) -> Vec<&[u8]> {
        self.headers
            .get_all(name)
            .iter()
            .map(|v| v.as_bytes())
            .collect()
    }
}
