use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use reserva_core::{OrderId, ServiceResult};

/// An order as returned by the backing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product: String,
}

/// Abstract capability an order backing store must provide.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Fetch an order by id. `None` means no such order.
    async fn order_by_id(&self, id: OrderId) -> ServiceResult<Option<Order>>;
}
