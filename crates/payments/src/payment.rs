use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use reserva_core::{PaymentId, ServiceResult};

/// A payment as returned by the backing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub amount_cents: i64, // Amount in smallest currency unit (e.g., cents)
}

/// Abstract capability a payment backing store must provide.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Fetch a payment by id. `None` means no such payment.
    async fn payment_by_id(&self, id: PaymentId) -> ServiceResult<Option<Payment>>;
}
