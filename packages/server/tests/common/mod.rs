//! Shared helpers for endpoint tests.
//!
//! Requests are driven through the full router in-process with
//! `tower::util::ServiceExt::oneshot`, middleware included, so tests see
//! exactly what a client on the wire would.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use listings::{demo_listings, ListingProvider};
use server_core::server::{build_app, AppState};
use tower::util::ServiceExt;

/// App backed by the demo corpus only, no remote provider.
pub fn demo_app() -> Router {
    app_with_provider(None)
}

/// App backed by the demo corpus plus the given remote provider.
pub fn app_with_provider(provider: Option<Arc<dyn ListingProvider>>) -> Router {
    build_app(AppState {
        corpus: Arc::new(demo_listings()),
        provider,
    })
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, "GET", uri).await
}

/// GET a JSON endpoint, returning status and decoded body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|error| {
        panic!("response body was not JSON: {error} ({bytes:?})");
    });
    (status, body)
}

/// The listing ids in a search response body, in order.
pub fn result_ids(body: &serde_json::Value) -> Vec<String> {
    body["results"]
        .as_array()
        .expect("results should be an array")
        .iter()
        .map(|listing| {
            listing["id"]
                .as_str()
                .expect("id should be a string")
                .to_string()
        })
        .collect()
}
