use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use reserva_core::OrderId;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/:id", get(get_order))
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let id = match OrderId::new(id) {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id")
        }
    };

    match services.orders.order_by_id(id).await {
        Ok(Some(order)) => (StatusCode::OK, Json(order)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "order not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}
