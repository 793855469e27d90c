//! HTTP client for posting JSON to the search API

use super::response::SearchResponse;
use crate::config::OutgoingSettings;
use crate::error::SearchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

const APPLICATION_JSON: &str = "application/json";

/// Pooled HTTP client for the search API
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    request_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SearchError> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self, SearchError> {
        let request_timeout = timeout_from_secs(settings.request_timeout)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(request_timeout)
            .pool_max_idle_per_host(settings.pool_maxsize);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            request_timeout,
        })
    }

    /// Per-request timeout applied to every call
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// POST a JSON body and return the raw response, whatever its status
    pub async fn post_json<T>(&self, url: &str, body: &T) -> Result<SearchResponse, SearchError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        let started = Instant::now();

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(payload)
            .send()
            .await?;

        let response = Self::parse_response(response).await?;
        debug!(
            url,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search API responded"
        );
        Ok(response)
    }

    /// Read the full response into a SearchResponse
    async fn parse_response(response: Response) -> Result<SearchResponse, SearchError> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(SearchResponse {
            status,
            headers,
            body,
            url,
        })
    }
}

/// Convert a configured timeout to a Duration; it must be finite and positive
fn timeout_from_secs(seconds: f64) -> Result<Duration, SearchError> {
    let invalid = |reason: String| SearchError::InvalidTimeout { seconds, reason };
    if seconds.is_nan() || seconds <= 0.0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Duration::try_from_secs_f64(seconds).map_err(|e| invalid(e.to_string()))
}
