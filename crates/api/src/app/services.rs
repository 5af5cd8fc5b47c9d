//! Service-contract wiring for the HTTP layer.

use std::sync::Arc;

use reserva_bookings::BookingService;
use reserva_infra::{
    InMemoryBookingStore, InMemoryOrderStore, InMemoryPaymentStore, InMemoryUserStore,
};
use reserva_orders::OrderService;
use reserva_payments::PaymentService;
use reserva_users::UserService;

/// The four abstract capabilities the handlers dispatch to.
///
/// Handlers receive this bundle via `Extension<Arc<AppServices>>`; each
/// request touches exactly one contract exactly once.
pub struct AppServices {
    pub bookings: Arc<dyn BookingService>,
    pub orders: Arc<dyn OrderService>,
    pub payments: Arc<dyn PaymentService>,
    pub users: Arc<dyn UserService>,
}

/// In-memory wiring (dev/test): every contract backed by a HashMap store.
pub fn build_in_memory_services() -> AppServices {
    AppServices {
        bookings: Arc::new(InMemoryBookingStore::new()),
        orders: Arc::new(InMemoryOrderStore::new()),
        payments: Arc::new(InMemoryPaymentStore::new()),
        users: Arc::new(InMemoryUserStore::new()),
    }
}
