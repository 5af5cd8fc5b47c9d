//! Payments domain module.
//!
//! Read-only on this surface: one record, one fetch-by-id contract.

pub mod payment;

pub use payment::{Payment, PaymentService};
