use axum::Router;

pub mod bookings;
pub mod orders;
pub mod payments;
pub mod system;
pub mod users;

#[cfg(test)]
pub mod test_support;

/// Router for all service-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/api/bookings", bookings::router())
        .nest("/api/orders", orders::router())
        .nest("/api/payments", payments::router())
        .nest("/api/users", users::router())
}
