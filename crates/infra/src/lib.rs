//! Infrastructure layer: concrete service adapters.
//!
//! Only in-memory adapters live here today (dev/test wiring); a real
//! deployment supplies store-backed implementations externally.

pub mod memory;

pub use memory::{
    InMemoryBookingStore, InMemoryOrderStore, InMemoryPaymentStore, InMemoryUserStore,
};
