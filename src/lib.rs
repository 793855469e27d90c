//! detector-search: client for the detector search API
//!
//! Finds detectors for a free-text query and matches detector descriptions
//! against utterances by forwarding JSON requests to a remote search service.
//! When search is turned off, a disabled service answers every call with an
//! absent response instead.

pub mod config;
pub mod error;
pub mod network;
pub mod search;

pub use config::Settings;
pub use error::SearchError;
pub use network::SearchResponse;
pub use search::{
    build_search_service, DisabledSearchClient, SearchClient, SearchParameters, SearchService,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for search API requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;
