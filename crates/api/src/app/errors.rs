use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use reserva_core::ServiceError;

/// Uniform mapping for backing-service failures.
///
/// Handlers never interpret these; every failure becomes the same generic
/// server-fault response at this boundary.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Backend(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "backing_service_failure",
            format!("{e:?}"),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
