//! `bazaar-infra` — stores and the service layer.
//!
//! The service layer is where policy, ownership, and the state machine meet a
//! store: every operation is capability check → business check → domain
//! transition → single write, with no partial effects.

pub mod seed;
pub mod services;
pub mod store;


pub use services::{CatalogService, DirectoryService};
pub use store::{InMemoryProductStore, InMemoryUserStore, ProductStore, UserStore};
