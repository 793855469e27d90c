//! Search API endpoint addresses

use crate::error::SearchError;
use url::Url;

const QUERY_DETECTORS_PATH: &str = "/queryDetectors";
const QUERY_UTTERANCES_PATH: &str = "/queryUtterances";

/// Fixed endpoints derived once from the configured base address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoints {
    /// Detector search endpoint
    pub query_detectors: String,
    /// Utterance matching endpoint
    pub query_utterances: String,
}

impl SearchEndpoints {
    /// Derive endpoints from a base search API address
    ///
    /// The base must be an absolute http(s) URL. A trailing slash is ignored.
    pub fn from_base(base_url: &str) -> Result<Self, SearchError> {
        let parsed = Url::parse(base_url).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SearchError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let base = base_url.trim_end_matches('/');
        Ok(Self {
            query_detectors: format!("{base}{QUERY_DETECTORS_PATH}"),
            query_utterances: format!("{base}{QUERY_UTTERANCES_PATH}"),
        })
    }

    /// Append `text` and `productid` query-string parameters to a URL
    pub fn with_query_params(
        url: &str,
        text: &str,
        product_id: &str,
    ) -> Result<String, SearchError> {
        let mut parsed = Url::parse(url).map_err(|e| SearchError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        parsed
            .query_pairs_mut()
            .append_pair("text", text)
            .append_pair("productid", product_id);
        Ok(parsed.into())
    }
}
