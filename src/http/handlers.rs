//! Request handlers.
//!
//! Dispatch is on the path alone: `/health` answers for every method,
//! everything else falls through to `not_found`.

use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};

/// Liveness check path.
pub const HEALTH_PATH: &str = "/health";

/// Body returned by the liveness check.
pub const HEALTH_BODY: &str = "OK";

/// `200 OK`, `Content-Type: text/plain`, body `OK`.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        HEALTH_BODY,
    )
}

/// `404 Not Found` with an empty body.
pub async fn not_found(uri: Uri) -> StatusCode {
    tracing::debug!(path = %uri.path(), "No handler for path");
    StatusCode::NOT_FOUND
}
