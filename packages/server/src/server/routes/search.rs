//! The search endpoint: normalize the query, pick a corpus, filter, respond.

use axum::extract::{Extension, RawQuery};
use axum::Json;
use listings::{filter_listings, Listing, SearchFilters};
use serde::Serialize;
use tracing::{debug, warn};

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<Listing>,
    pub total: usize,
}

/// Search endpoint
///
/// Never fails from the caller's point of view: malformed filter values
/// normalize to "unconstrained" per the filter contract, and a misbehaving
/// remote provider falls back to the local corpus. The filter engine runs
/// over whichever corpus was chosen, so remote results obey exactly the
/// same criteria as local ones.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    RawQuery(query): RawQuery,
) -> Json<SearchResponse> {
    let filters = SearchFilters::from_query(query.as_deref().unwrap_or(""));

    let remote = match &state.provider {
        Some(provider) => match provider.fetch_listings(&filters).await {
            Ok(listings) if !listings.is_empty() => Some(listings),
            Ok(_) => {
                debug!("remote listings fetch returned nothing, using local corpus");
                None
            }
            Err(error) => {
                warn!(error = %error, "remote listings fetch failed, using local corpus");
                None
            }
        },
        None => None,
    };

    let corpus: &[Listing] = remote.as_deref().unwrap_or(&state.corpus);
    let results = filter_listings(&filters, corpus);

    Json(SearchResponse {
        total: results.len(),
        results,
    })
}
