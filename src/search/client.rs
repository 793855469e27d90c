//! Search service backed by the remote search API

use super::endpoints::SearchEndpoints;
use super::params::{detectors_body, utterances_body, SearchParameters};
use super::{SearchOutcome, SearchService};
use crate::config::OutgoingSettings;
use crate::error::SearchError;
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::{debug, info, Instrument};

/// Client for the detector search API
///
/// Owns one connection pool for its whole lifetime. Clones share the pool,
/// which is released when the last clone is dropped.
#[derive(Clone)]
pub struct SearchClient {
    http: HttpClient,
    endpoints: SearchEndpoints,
}

impl SearchClient {
    /// Create a client for `base_url` with default outgoing settings
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        Self::with_settings(base_url, &OutgoingSettings::default())
    }

    /// Create a client for `base_url` with custom outgoing settings
    pub fn with_settings(base_url: &str, outgoing: &OutgoingSettings) -> Result<Self, SearchError> {
        let endpoints = SearchEndpoints::from_base(base_url)?;
        let http = HttpClient::with_settings(outgoing)?;

        info!(
            detectors = %endpoints.query_detectors,
            utterances = %endpoints.query_utterances,
            timeout_secs = http.request_timeout().as_secs_f64(),
            "Search API client initialized"
        );

        Ok(Self::from_parts(http, endpoints))
    }

    /// Assemble a client from an existing pool and endpoints
    pub fn from_parts(http: HttpClient, endpoints: SearchEndpoints) -> Self {
        Self { http, endpoints }
    }

    /// Endpoints this client posts to
    pub fn endpoints(&self) -> &SearchEndpoints {
        &self.endpoints
    }

    /// Release this handle on the connection pool
    pub fn close(self) {
        debug!("search API client closed");
    }
}

#[async_trait]
impl SearchService for SearchClient {
    fn name(&self) -> &str {
        "search_api"
    }

    async fn search_detectors(
        &self,
        request_id: Option<&str>,
        query: &str,
        parameters: &SearchParameters,
    ) -> SearchOutcome {
        let body = detectors_body(request_id, query, parameters)?;
        let span = tracing::debug_span!(
            "search_detectors",
            request_id = request_id.unwrap_or_default(),
            endpoint = %self.endpoints.query_detectors
        );

        let response = self
            .http
            .post_json(&self.endpoints.query_detectors, body.as_map())
            .instrument(span)
            .await?;
        Ok(Some(response))
    }

    async fn search_utterances(
        &self,
        request_id: Option<&str>,
        query: &str,
        detector_utterances: &[String],
        parameters: &SearchParameters,
    ) -> SearchOutcome {
        let body = utterances_body(request_id, query, detector_utterances, parameters)?;
        let span = tracing::debug_span!(
            "search_utterances",
            request_id = request_id.unwrap_or_default(),
            utterances = detector_utterances.len(),
            endpoint = %self.endpoints.query_utterances
        );

        let response = self
            .http
            .post_json(&self.endpoints.query_utterances, body.as_map())
            .instrument(span)
            .await?;
        Ok(Some(response))
    }
}
