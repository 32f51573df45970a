//! Liveness endpoint. Never touches the job slot.

use axum::Router;
use axum::routing::get;

/// GET /health
pub async fn health_check() -> &'static str {
    "Healthy"
}

/// Create the health routes router.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health_check))
}
