//! Strongly-typed identifiers used across the domain.
//!
//! Every identifier on the HTTP surface is a positive integer. The newtypes
//! deserialize transparently inside payloads (payload ids are pass-through,
//! matching the surface contract); only the fallible constructor used for
//! path parameters enforces positivity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a booking.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

/// Identifier of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

/// Identifier of a payment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(i64);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Identifier of a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

macro_rules! impl_entity_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Construct an identifier, rejecting non-positive values.
            pub fn new(value: i64) -> Result<Self, DomainError> {
                if value <= 0 {
                    return Err(DomainError::invalid_id(format!(
                        "{} must be positive, got {}",
                        $name, value
                    )));
                }
                Ok(Self(value))
            }

            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = i64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::new(value)
            }
        }
    };
}

impl_entity_id!(BookingId, "BookingId");
impl_entity_id!(OrderId, "OrderId");
impl_entity_id!(PaymentId, "PaymentId");
impl_entity_id!(ProductId, "ProductId");
impl_entity_id!(UserId, "UserId");
