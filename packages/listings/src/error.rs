//! Typed errors for the listings library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur in listings operations.
#[derive(Debug, Error)]
pub enum ListingsError {
    /// Remote listing fetch failed
    #[error("listing fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Vision feature extraction failed
    #[error("vision extraction failed: {0}")]
    Vision(String),
}

/// Errors that can occur while fetching listings from a provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request could not be completed (connect failure, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream status {status}")]
    UpstreamStatus { status: u16 },

    /// Response body could not be decoded as a listings payload
    #[error("decode failed: {0}")]
    Decode(#[source] reqwest::Error),

    /// Provider is misconfigured or otherwise unable to serve the request
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for listings operations.
pub type Result<T> = std::result::Result<T, ListingsError>;

/// Result type alias for provider fetches.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
