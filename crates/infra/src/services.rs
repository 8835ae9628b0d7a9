//! Service layer: the operations the HTTP surface (and tests) call.

pub mod catalog;
pub mod directory;

pub use catalog::CatalogService;
pub use directory::DirectoryService;
