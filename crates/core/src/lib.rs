//! `reserva-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult, ServiceError, ServiceResult};
pub use id::{BookingId, OrderId, PaymentId, ProductId, UserId};
