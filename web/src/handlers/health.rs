//! Health and metrics endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems.

use crate::error::AppError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;

/// Simple health check endpoint (for basic liveness).
///
/// Returns 200 OK to indicate the service is running.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Render the Prometheus text exposition.
///
/// Applications call this from their own `GET /metrics` handler with the
/// handle stored in their state. Without an installed recorder the endpoint
/// answers 503.
#[must_use]
pub fn metrics_response(handle: Option<&PrometheusHandle>) -> Response {
    match handle {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => AppError::unavailable("metrics recorder is not installed").into_response(),
    }
}
