//! Bookings domain module.
//!
//! This crate contains the booking record and the abstract service contract
//! a backing store must satisfy (no IO, no HTTP, no storage).

pub mod booking;

pub use booking::{Booking, BookingService};
