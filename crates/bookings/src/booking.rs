use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use reserva_core::{BookingId, ServiceResult};

/// A booking as carried on the wire; this crate only passes it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer: String,
}

/// Abstract capability a booking backing store must provide.
///
/// No implementation lives here; adapters are wired in externally
/// (`reserva-infra` ships an in-memory one for dev/test).
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Persist a new booking and return the stored representation.
    async fn create(&self, booking: Booking) -> ServiceResult<Booking>;

    /// Replace a booking wholesale. `None` means no such booking.
    async fn update(&self, id: BookingId, booking: Booking) -> ServiceResult<Option<Booking>>;

    /// Patch only the customer field. `false` means no such booking.
    async fn update_customer(&self, id: BookingId, customer: String) -> ServiceResult<bool>;

    /// Delete a booking. `false` means no such booking.
    async fn delete(&self, id: BookingId) -> ServiceResult<bool>;
}
