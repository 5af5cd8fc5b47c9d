//! Mock service bundles for handler tests.
//!
//! A bundle built from fresh mocks has no expectations: any call into a
//! contract the test did not stub fails the test, which pins the
//! one-service-call-per-request rule.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use reserva_bookings::{Booking, BookingService};
use reserva_core::{BookingId, OrderId, PaymentId, ProductId, ServiceResult};
use reserva_orders::{Order, OrderService};
use reserva_payments::{Payment, PaymentService};
use reserva_users::{Product, User, UserService};

use crate::app::services::AppServices;

mock! {
    pub Bookings {}

    #[async_trait]
    impl BookingService for Bookings {
        async fn create(&self, booking: Booking) -> ServiceResult<Booking>;
        async fn update(&self, id: BookingId, booking: Booking) -> ServiceResult<Option<Booking>>;
        async fn update_customer(&self, id: BookingId, customer: String) -> ServiceResult<bool>;
        async fn delete(&self, id: BookingId) -> ServiceResult<bool>;
    }
}

mock! {
    pub Orders {}

    #[async_trait]
    impl OrderService for Orders {
        async fn order_by_id(&self, id: OrderId) -> ServiceResult<Option<Order>>;
    }
}

mock! {
    pub Payments {}

    #[async_trait]
    impl PaymentService for Payments {
        async fn payment_by_id(&self, id: PaymentId) -> ServiceResult<Option<Payment>>;
    }
}

mock! {
    pub Users {}

    #[async_trait]
    impl UserService for Users {
        async fn user_exists(&self, email: String) -> ServiceResult<bool>;
        async fn product_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>>;
        async fn create_user(&self, user: User) -> ServiceResult<User>;
    }
}

pub fn services_with(
    bookings: MockBookings,
    orders: MockOrders,
    payments: MockPayments,
    users: MockUsers,
) -> Arc<AppServices> {
    Arc::new(AppServices {
        bookings: Arc::new(bookings),
        orders: Arc::new(orders),
        payments: Arc::new(payments),
        users: Arc::new(users),
    })
}

pub fn bookings_only(mock: MockBookings) -> Arc<AppServices> {
    services_with(mock, MockOrders::new(), MockPayments::new(), MockUsers::new())
}

pub fn orders_only(mock: MockOrders) -> Arc<AppServices> {
    services_with(MockBookings::new(), mock, MockPayments::new(), MockUsers::new())
}

pub fn payments_only(mock: MockPayments) -> Arc<AppServices> {
    services_with(MockBookings::new(), MockOrders::new(), mock, MockUsers::new())
}

pub fn users_only(mock: MockUsers) -> Arc<AppServices> {
    services_with(MockBookings::new(), MockOrders::new(), MockPayments::new(), mock)
}

/// Read a JSON body out of a handler response.
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
