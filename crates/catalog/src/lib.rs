//! Catalog domain module.
//!
//! This crate contains the product entity and its lifecycle state machine,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Authorization is the caller's concern; the state machine only
//! guards *which transition is legal from which status*.

pub mod filter;
pub mod product;

pub use filter::{CatalogFilter, CatalogOrdering, PublicCatalogFilter};
pub use product::{NewProduct, Product, ProductStatus, ProductUpdate};
