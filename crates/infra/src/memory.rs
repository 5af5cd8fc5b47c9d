//! In-memory service adapters.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use reserva_bookings::{Booking, BookingService};
use reserva_core::{BookingId, OrderId, PaymentId, ProductId, ServiceError, ServiceResult};
use reserva_orders::{Order, OrderService};
use reserva_payments::{Payment, PaymentService};
use reserva_users::{Product, User, UserService};

fn poisoned(what: &'static str) -> ServiceError {
    ServiceError::backend(anyhow::anyhow!("{what} lock poisoned"))
}

/// In-memory booking store keyed by booking id.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: RwLock<HashMap<i64, Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a booking directly (tests/dev).
    pub fn seed(&self, booking: Booking) {
        if let Ok(mut map) = self.bookings.write() {
            map.insert(booking.id.get(), booking);
        }
    }
}

#[async_trait]
impl BookingService for InMemoryBookingStore {
    async fn create(&self, booking: Booking) -> ServiceResult<Booking> {
        let mut map = self.bookings.write().map_err(|_| poisoned("booking store"))?;
        map.insert(booking.id.get(), booking.clone());
        Ok(booking)
    }

    async fn update(&self, id: BookingId, booking: Booking) -> ServiceResult<Option<Booking>> {
        let mut map = self.bookings.write().map_err(|_| poisoned("booking store"))?;
        if !map.contains_key(&id.get()) {
            return Ok(None);
        }
        // The path id wins over any id embedded in the payload.
        let stored = Booking {
            id,
            customer: booking.customer,
        };
        map.insert(id.get(), stored.clone());
        Ok(Some(stored))
    }

    async fn update_customer(&self, id: BookingId, customer: String) -> ServiceResult<bool> {
        let mut map = self.bookings.write().map_err(|_| poisoned("booking store"))?;
        match map.get_mut(&id.get()) {
            Some(booking) => {
                booking.customer = customer;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BookingId) -> ServiceResult<bool> {
        let mut map = self.bookings.write().map_err(|_| poisoned("booking store"))?;
        Ok(map.remove(&id.get()).is_some())
    }
}

/// In-memory order store, read-only through the service contract.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<i64, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an order directly (tests/dev).
    pub fn seed(&self, order: Order) {
        if let Ok(mut map) = self.orders.write() {
            map.insert(order.id.get(), order);
        }
    }
}

#[async_trait]
impl OrderService for InMemoryOrderStore {
    async fn order_by_id(&self, id: OrderId) -> ServiceResult<Option<Order>> {
        let map = self.orders.read().map_err(|_| poisoned("order store"))?;
        Ok(map.get(&id.get()).cloned())
    }
}

/// In-memory payment store, read-only through the service contract.
#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    payments: RwLock<HashMap<i64, Payment>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a payment directly (tests/dev).
    pub fn seed(&self, payment: Payment) {
        if let Ok(mut map) = self.payments.write() {
            map.insert(payment.id.get(), payment);
        }
    }
}

#[async_trait]
impl PaymentService for InMemoryPaymentStore {
    async fn payment_by_id(&self, id: PaymentId) -> ServiceResult<Option<Payment>> {
        let map = self.payments.read().map_err(|_| poisoned("payment store"))?;
        Ok(map.get(&id.get()).cloned())
    }
}

/// In-memory user + product store.
///
/// Users are keyed by id; existence checks scan by email.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
    products: RwLock<HashMap<i64, Product>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user directly (tests/dev).
    pub fn seed_user(&self, user: User) {
        if let Ok(mut map) = self.users.write() {
            map.insert(user.id.get(), user);
        }
    }

    /// Seed a product directly (tests/dev).
    pub fn seed_product(&self, product: Product) {
        if let Ok(mut map) = self.products.write() {
            map.insert(product.id.get(), product);
        }
    }
}

#[async_trait]
impl UserService for InMemoryUserStore {
    async fn user_exists(&self, email: String) -> ServiceResult<bool> {
        let map = self.users.read().map_err(|_| poisoned("user store"))?;
        Ok(map.values().any(|u| u.email == email))
    }

    async fn product_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        let map = self.products.read().map_err(|_| poisoned("user store"))?;
        Ok(map.get(&id.get()).cloned())
    }

    async fn create_user(&self, user: User) -> ServiceResult<User> {
        let mut map = self.users.write().map_err(|_| poisoned("user store"))?;
        map.insert(user.id.get(), user.clone());
        Ok(user)
    }
}
