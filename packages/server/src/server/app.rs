//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use listings::{Listing, ListingProvider};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{health_handler, search_handler};

/// How long a request may run before the boundary gives up on it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Local corpus, always available as a fallback.
    pub corpus: Arc<Vec<Listing>>,
    /// Optional remote corpus source, tried before the local corpus.
    pub provider: Option<Arc<dyn ListingProvider>>,
}

/// CORS for a public, read-only search API: any origin may GET. Preflights
/// are answered here with 204 No Content instead of being routed.
async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(&mut response);
        return response;
    }
    let mut response = next.run(request).await;
    apply_cors_headers(&mut response);
    response
}

fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}

/// Build the Axum application router
///
/// Middleware layers (applied in reverse order - last added runs first):
/// request ids are assigned outermost so the trace span and response header
/// both carry them; CORS wraps the panic and timeout conversions so the
/// 500s and 408s they generate carry the headers like any routed response,
/// and preflights are answered before routing runs.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/search", get(search_handler))
        .layer(Extension(state))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(cors_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
