use std::sync::Arc;

use bazaar_assistant::{Assistant, UnconfiguredBackend};
use bazaar_infra::{
    seed::{seed_demo_data, SeedData},
    CatalogService, DirectoryService, InMemoryProductStore, InMemoryUserStore,
};

/// The wired application: stores, domain services, and the chat assistant.
///
/// Everything is in-memory; state lives for the lifetime of the process.
pub struct AppServices {
    pub catalog: CatalogService<Arc<InMemoryProductStore>>,
    pub directory: DirectoryService<Arc<InMemoryUserStore>>,
    pub assistant: Assistant<UnconfiguredBackend>,
    pub seed: SeedData,
}

pub fn build_services() -> AppServices {
    let products = Arc::new(InMemoryProductStore::new());
    let users = Arc::new(InMemoryUserStore::new());

    let seed = seed_demo_data(products.as_ref(), users.as_ref());

    AppServices {
        catalog: CatalogService::new(products),
        directory: DirectoryService::new(users),
        assistant: Assistant::new(UnconfiguredBackend),
        seed,
    }
}
