//! HTTP networking module
//!
//! Provides the pooled HTTP client used to talk to the search API.

mod client;
mod response;

pub use client::HttpClient;
pub use response::SearchResponse;
