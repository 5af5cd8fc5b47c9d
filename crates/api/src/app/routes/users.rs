use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use reserva_core::ProductId;
use reserva_users::User;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/product/:id", get(get_product))
        .route("/:email", get(check_user))
}

pub async fn check_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(email): Path<String>,
) -> axum::response::Response {
    if email.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "email required");
    }

    match services.users.user_exists(email).await {
        Ok(true) => (StatusCode::OK, Json(dto::message("user exists"))).into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let id = match ProductId::new(id) {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.users.product_by_id(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<User>,
) -> axum::response::Response {
    match services.users.create_user(body).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
