use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};

use reserva_bookings::Booking;
use reserva_core::BookingId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(create_booking)).route(
        "/:id",
        put(update_booking)
            .patch(update_customer)
            .delete(delete_booking),
    )
}

pub async fn create_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Booking>,
) -> axum::response::Response {
    match services.bookings.create(body).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<Booking>,
) -> axum::response::Response {
    let id = match BookingId::new(id) {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid booking id")
        }
    };

    match services.bookings.update(id, body).await {
        Ok(Some(updated)) => (StatusCode::OK, Json(updated)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "booking not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::UpdateCustomerRequest>,
) -> axum::response::Response {
    let id = match BookingId::new(id) {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid booking id")
        }
    };
    if body.customer.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "customer must not be empty",
        );
    }

    match services.bookings.update_customer(id, body.customer).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "booking not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let id = match BookingId::new(id) {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid booking id")
        }
    };

    match services.bookings.delete(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "booking not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::app::routes::test_support::{bookings_only, read_json, MockBookings};

    fn sample_booking() -> Booking {
        Booking {
            id: BookingId::new(1).unwrap(),
            customer: "Mamata Salunkhe".to_string(),
        }
    }

    #[tokio::test]
    async fn create_booking_echoes_the_created_booking_with_ok() {
        let mut mock = MockBookings::new();
        mock.expect_create().times(1).returning(|b| Ok(b));
        let services = bookings_only(mock);

        let response = create_booking(Extension(services), Json(sample_booking())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "id": 1, "customer": "Mamata Salunkhe" })
        );
    }

    #[tokio::test]
    async fn update_booking_with_invalid_id_is_bad_request_and_skips_the_service() {
        let mut mock = MockBookings::new();
        mock.expect_update().times(0);
        let services = bookings_only(mock);

        let response =
            update_booking(Extension(services), Path(0), Json(sample_booking())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_booking_reports_absence_as_not_found() {
        let mut mock = MockBookings::new();
        mock.expect_update().times(1).returning(|_, _| Ok(None));
        let services = bookings_only(mock);

        let response =
            update_booking(Extension(services), Path(1), Json(sample_booking())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_booking_returns_the_updated_booking_and_calls_the_service_once() {
        let mut mock = MockBookings::new();
        mock.expect_update()
            .times(1)
            .returning(|id, b| Ok(Some(Booking { id, customer: b.customer })));
        let services = bookings_only(mock);

        let response =
            update_booking(Extension(services), Path(1), Json(sample_booking())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["customer"], "Mamata Salunkhe");
    }

    #[tokio::test]
    async fn patch_with_invalid_inputs_is_bad_request_and_skips_the_service() {
        let mut mock = MockBookings::new();
        mock.expect_update_customer().times(0);
        let services = bookings_only(mock);

        let response = update_customer(
            Extension(services),
            Path(0),
            Json(dto::UpdateCustomerRequest {
                customer: String::new(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn patch_with_empty_customer_is_bad_request_even_for_a_valid_id() {
        let mut mock = MockBookings::new();
        mock.expect_update_customer().times(0);
        let services = bookings_only(mock);

        let response = update_customer(
            Extension(services),
            Path(1),
            Json(dto::UpdateCustomerRequest {
                customer: String::new(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn patch_reports_absence_as_not_found() {
        let mut mock = MockBookings::new();
        mock.expect_update_customer()
            .times(1)
            .returning(|_, _| Ok(false));
        let services = bookings_only(mock);

        let response = update_customer(
            Extension(services),
            Path(1),
            Json(dto::UpdateCustomerRequest {
                customer: "Mamata".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn patch_success_is_no_content_and_calls_the_service_once() {
        let mut mock = MockBookings::new();
        mock.expect_update_customer()
            .with(eq(BookingId::new(1).unwrap()), eq("Mamata".to_string()))
            .times(1)
            .returning(|_, _| Ok(true));
        let services = bookings_only(mock);

        let response = update_customer(
            Extension(services),
            Path(1),
            Json(dto::UpdateCustomerRequest {
                customer: "Mamata".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_with_invalid_id_is_bad_request_and_skips_the_service() {
        let mut mock = MockBookings::new();
        mock.expect_delete().times(0);
        let services = bookings_only(mock);

        let response = delete_booking(Extension(services), Path(0)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_reports_absence_as_not_found() {
        let mut mock = MockBookings::new();
        mock.expect_delete().times(1).returning(|_| Ok(false));
        let services = bookings_only(mock);

        let response = delete_booking(Extension(services), Path(1)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_success_is_no_content_and_calls_the_service_once() {
        let mut mock = MockBookings::new();
        mock.expect_delete()
            .with(eq(BookingId::new(1).unwrap()))
            .times(1)
            .returning(|_| Ok(true));
        let services = bookings_only(mock);

        let response = delete_booking(Extension(services), Path(1)).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
