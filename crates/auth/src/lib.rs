//! `bazaar-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: given a role,
//! an action, and a resource's owning business, it decides allow/deny and
//! nothing else.

pub mod actions;
pub mod actor;
pub mod authorize;
pub mod claims;
pub mod matrix;
pub mod roles;

pub use actions::Action;
pub use actor::Actor;
pub use authorize::{authorize, ensure_same_business, AuthzError};
pub use claims::{Hs256JwtValidator, JwtClaims, JwtValidator, TokenValidationError, validate_claims};
pub use matrix::CapabilityMatrix;
pub use roles::Role;
