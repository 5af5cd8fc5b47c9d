//! Users domain module.
//!
//! User and product records plus the user-facing service contract
//! (existence check by email, product lookup, user creation).

pub mod user;

pub use user::{Product, User, UserService};
