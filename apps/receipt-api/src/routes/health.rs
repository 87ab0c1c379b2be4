//! Health check endpoint.

use axum::response::IntoResponse;

/// Liveness probe. The store is in memory, so there is nothing else to check.
pub async fn health_handler() -> impl IntoResponse {
    "OK"
}
