use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use reserva_core::{ProductId, ServiceResult, UserId};

/// A user as carried on the wire.
///
/// Carries an email because the existence check looks users up by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// A product, fetched by id on this surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

/// Abstract capability the user backing store must provide.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Whether a user with this email exists.
    async fn user_exists(&self, email: String) -> ServiceResult<bool>;

    /// Fetch a product by id. `None` means no such product.
    async fn product_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>>;

    /// Persist a new user and return the stored representation.
    async fn create_user(&self, user: User) -> ServiceResult<User>;
}
