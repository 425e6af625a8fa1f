use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Router fallback for unknown routes.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    tracing::debug!(%method, %uri, "No route matched");

    let body = Json(ErrorResponse::new(
        ErrorCode::NotFound,
        format!("No route for {} {}", method, uri.path()),
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
