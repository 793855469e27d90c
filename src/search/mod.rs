//! Detector search services
//!
//! [`SearchService`] is the capability set upstream code depends on. Two
//! variants implement it: [`SearchClient`] forwards calls to the remote
//! search API, [`DisabledSearchClient`] answers every call with an absent
//! response. The variant is picked once at startup by
//! [`build_search_service`].

mod client;
mod disabled;
mod endpoints;
mod params;

pub use client::SearchClient;
pub use disabled::DisabledSearchClient;
pub use endpoints::SearchEndpoints;
pub use params::{detectors_body, utterances_body, RequestBody, SearchParameters};

use crate::config::Settings;
use crate::error::SearchError;
use crate::network::SearchResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a search call: `None` means no search results are available
pub type SearchOutcome = Result<Option<SearchResponse>, SearchError>;

/// Operations offered by a search service
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Service name for logging
    fn name(&self) -> &str;

    /// Whether calls reach the remote search API
    fn is_enabled(&self) -> bool {
        true
    }

    /// Find detectors matching a free-text query
    async fn search_detectors(
        &self,
        request_id: Option<&str>,
        query: &str,
        parameters: &SearchParameters,
    ) -> SearchOutcome;

    /// Match a detector description against candidate utterances
    async fn search_utterances(
        &self,
        request_id: Option<&str>,
        query: &str,
        detector_utterances: &[String],
        parameters: &SearchParameters,
    ) -> SearchOutcome;

    /// Start training a search model
    async fn trigger_training(
        &self,
        _request_id: Option<&str>,
        _training_config: &str,
        _parameters: &SearchParameters,
    ) -> SearchOutcome {
        warn!(service = self.name(), "trigger_training is not supported");
        Err(SearchError::Unsupported("trigger_training"))
    }

    /// Ask the search API to reload its models
    async fn trigger_model_refresh(
        &self,
        _request_id: Option<&str>,
        _parameters: &SearchParameters,
    ) -> SearchOutcome {
        warn!(service = self.name(), "trigger_model_refresh is not supported");
        Err(SearchError::Unsupported("trigger_model_refresh"))
    }
}

/// Build the search service selected by configuration
pub fn build_search_service(settings: &Settings) -> Result<Arc<dyn SearchService>, SearchError> {
    if !settings.search.enabled {
        info!("Search API disabled, search calls will return no results");
        return Ok(Arc::new(DisabledSearchClient::new()));
    }

    let client = SearchClient::with_settings(&settings.search.base_url, &settings.outgoing)?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_enabled_service() {
        let mut settings = Settings::default();
        settings.search.base_url = "https://search.example".to_string();

        let service = build_search_service(&settings).unwrap();
        assert!(service.is_enabled());
        assert_eq!(service.name(), "search_api");
    }

    #[tokio::test]
    async fn test_build_disabled_service_ignores_base_url() {
        let mut settings = Settings::default();
        settings.search.enabled = false;
        settings.search.base_url = "not a url".to_string();

        let service = build_search_service(&settings).unwrap();
        assert!(!service.is_enabled());
        assert_eq!(service.name(), "disabled");
    }

    #[test]
    fn test_build_with_negative_timeout_from_file_fails() {
        let yaml = r#"
search:
  base_url: "https://search.example"
outgoing:
  request_timeout: -1
"#;
        let settings = Settings::from_yaml(yaml).unwrap();

        assert!(matches!(
            build_search_service(&settings),
            Err(SearchError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn test_build_with_bad_base_url_fails() {
        let mut settings = Settings::default();
        settings.search.base_url = "not a url".to_string();

        assert!(matches!(
            build_search_service(&settings),
            Err(SearchError::InvalidBaseUrl { .. })
        ));
    }
}
