use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use reserva_core::PaymentId;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/:id", get(get_payment))
}

pub async fn get_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let id = match PaymentId::new(id) {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid payment id")
        }
    };

    match services.payments.payment_by_id(id).await {
        Ok(Some(payment)) => (StatusCode::OK, Json(payment)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "payment not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}
