use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

/// Health check endpoint
///
/// The service has no external dependencies it must hold open (the remote
/// listings API is optional and degraded gracefully), so reachability is
/// health: if this answers, the server is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
