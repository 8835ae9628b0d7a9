use serde::{Deserialize, Serialize};

use bazaar_core::ProductId;

/// One approved product as the assistant sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub id: ProductId,
    pub name: String,
    pub price_cents: u64,
    pub description: String,
}

/// Immutable snapshot of the approved catalog.
///
/// The assistant answers only from this; it never reads the stores directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub items: Vec<SnapshotItem>,
}

impl CatalogSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
