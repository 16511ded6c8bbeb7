//! Listing corpus providers.
//!
//! The search boundary always has a local corpus to fall back on; a
//! provider is an optional remote source layered in front of it.
//!
//! # Design: fallback is the caller's job
//!
//! `fetch_listings` returns a plain `Result` and never degrades silently.
//! The caller (the search handler) owns the policy: on any fetch error, or
//! on an empty remote result, it serves the local corpus instead. Keeping
//! that decision out of the provider means a provider can be swapped or
//! mocked without dragging fallback behavior along with it.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretBox, SecretString};
use std::time::Duration;

use crate::error::{FetchError, FetchResult};
use crate::types::{Listing, SearchFilters};

/// How long a remote fetch may take before the handler gives up and serves
/// the local corpus.
const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

/// A remote source of listings.
///
/// # Implementations
///
/// - `RemoteListingProvider` - HTTP listings API
/// - `MockListingProvider` - For testing
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Fetch listings matching `filters` from the remote source.
    ///
    /// The returned listings are a candidate corpus, not final results: the
    /// caller re-applies the filter engine locally so that remote and local
    /// corpora go through identical matching.
    async fn fetch_listings(&self, filters: &SearchFilters) -> FetchResult<Vec<Listing>>;
}

/// Mock provider for testing fallback and pass-through behavior.
#[derive(Default)]
pub struct MockListingProvider {
    listings: std::sync::RwLock<Vec<Listing>>,
    failure: std::sync::RwLock<Option<String>>,
    calls: std::sync::RwLock<Vec<SearchFilters>>,
}

impl MockListingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these listings on every fetch.
    pub fn with_listings(self, listings: Vec<Listing>) -> Self {
        *self.listings.write().unwrap() = listings;
        self
    }

    /// Fail every fetch with the given reason.
    pub fn failing(self, reason: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(reason.into());
        self
    }

    /// The filters each fetch was called with, in call order.
    pub fn recorded_filters(&self) -> Vec<SearchFilters> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ListingProvider for MockListingProvider {
    async fn fetch_listings(&self, filters: &SearchFilters) -> FetchResult<Vec<Listing>> {
        self.calls.write().unwrap().push(filters.clone());
        if let Some(reason) = self.failure.read().unwrap().clone() {
            return Err(FetchError::Unavailable(reason));
        }
        Ok(self.listings.read().unwrap().clone())
    }
}

/// HTTP-backed provider for an external listings API.
///
/// Issues `GET {base}/search` with the set filter criteria as query
/// parameters and a bearer token when an API key is configured. The remote
/// API is expected to answer `{"results": [...]}` in the same listing shape
/// this crate serves.
pub struct RemoteListingProvider {
    base_url: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl RemoteListingProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.map(|key| SecretBox::new(key.into_boxed_str())),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ListingProvider for RemoteListingProvider {
    async fn fetch_listings(&self, filters: &SearchFilters) -> FetchResult<Vec<Listing>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            results: Vec<Listing>,
        }

        let mut request = self
            .client
            .get(search_endpoint(&self.base_url))
            .timeout(FETCH_TIMEOUT)
            .query(&filters.to_query_pairs());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(FetchError::Transport)?;
        let status = response.status().as_u16();
        // Anything past the 2xx range (after redirects resolve) counts as a
        // miss, not just 4xx/5xx.
        if status >= 300 {
            return Err(FetchError::UpstreamStatus { status });
        }

        let payload: Response = response.json().await.map_err(FetchError::Decode)?;
        Ok(payload.results)
    }
}

fn search_endpoint(base_url: &str) -> String {
    format!("{}/search", base_url.trim_end_matches('/'))
}
