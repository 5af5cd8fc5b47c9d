use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Body for `PATCH /api/bookings/:id`.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub customer: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn message(text: &str) -> serde_json::Value {
    serde_json::json!({ "message": text })
}
