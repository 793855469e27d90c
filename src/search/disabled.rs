//! Search service used when search is turned off

use super::{SearchOutcome, SearchParameters, SearchService};
use async_trait::async_trait;
use tracing::debug;

/// No-op search service; every operation returns `Ok(None)` without I/O
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSearchClient;

impl DisabledSearchClient {
    pub fn new() -> Self {
        Self
    }

    /// Release the service. Holds nothing, so this only logs.
    pub fn close(self) {
        debug!("disabled search service closed");
    }
}

#[async_trait]
impl SearchService for DisabledSearchClient {
    fn name(&self) -> &str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    async fn search_detectors(
        &self,
        _request_id: Option<&str>,
        _query: &str,
        _parameters: &SearchParameters,
    ) -> SearchOutcome {
        Ok(None)
    }

    async fn search_utterances(
        &self,
        _request_id: Option<&str>,
        _query: &str,
        _detector_utterances: &[String],
        _parameters: &SearchParameters,
    ) -> SearchOutcome {
        Ok(None)
    }

    async fn trigger_training(
        &self,
        _request_id: Option<&str>,
        _training_config: &str,
        _parameters: &SearchParameters,
    ) -> SearchOutcome {
        Ok(None)
    }

    async fn trigger_model_refresh(
        &self,
        _request_id: Option<&str>,
        _parameters: &SearchParameters,
    ) -> SearchOutcome {
        Ok(None)
    }
}
