//! Accounts domain module: businesses (tenants) and their users.
//!
//! Pure domain logic; uniqueness enforcement needs a store and therefore lives
//! in the service layer.

pub mod business;
pub mod user;

pub use business::Business;
pub use user::{NewUser, User};
