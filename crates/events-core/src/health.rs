use axum::http::StatusCode;

/// Handler for `GET /healthz`, the liveness check.
///
/// Readiness depends on service resources, so each service provides its own
/// `readyz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
