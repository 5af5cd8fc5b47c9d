//! Orders domain module.
//!
//! Read-only on this surface: one record, one fetch-by-id contract.

pub mod order;

pub use order::{Order, OrderService};
