use serde::{Deserialize, Serialize};

use bazaar_core::{BusinessId, DomainError, DomainResult};

use crate::{Product, ProductStatus};

/// Ordering options for the business-management view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogOrdering {
    PriceAsc,
    PriceDesc,
    CreatedAtAsc,
    CreatedAtDesc,
}

impl core::str::FromStr for CatalogOrdering {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(CatalogOrdering::PriceAsc),
            "-price" => Ok(CatalogOrdering::PriceDesc),
            "created_at" => Ok(CatalogOrdering::CreatedAtAsc),
            "-created_at" => Ok(CatalogOrdering::CreatedAtDesc),
            other => Err(DomainError::validation(format!("unknown ordering '{other}'"))),
        }
    }
}

/// Filters for the business-management view (all statuses, one business).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub status: Option<ProductStatus>,
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    pub min_price_cents: Option<u64>,
    pub max_price_cents: Option<u64>,
    pub ordering: Option<CatalogOrdering>,
}

impl CatalogFilter {
    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(min), Some(max)) = (self.min_price_cents, self.max_price_cents) {
            if min > max {
                return Err(DomainError::validation(
                    "max_price must be greater than or equal to min_price",
                ));
            }
        }
        Ok(())
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(status) = self.status {
            if product.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !name_contains(&product.name, search) {
                return false;
            }
        }
        if let Some(min) = self.min_price_cents {
            if product.price_cents < min {
                return false;
            }
        }
        if let Some(max) = self.max_price_cents {
            if product.price_cents > max {
                return false;
            }
        }
        true
    }

    /// Apply the requested ordering, if any.
    pub fn sort(&self, products: &mut [Product]) {
        match self.ordering {
            Some(CatalogOrdering::PriceAsc) => products.sort_by_key(|p| p.price_cents),
            Some(CatalogOrdering::PriceDesc) => {
                products.sort_by(|a, b| b.price_cents.cmp(&a.price_cents))
            }
            Some(CatalogOrdering::CreatedAtAsc) => products.sort_by_key(|p| p.created_at),
            Some(CatalogOrdering::CreatedAtDesc) => {
                products.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
            None => {}
        }
    }
}

/// Filters for the public storefront view (approved products, any business).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicCatalogFilter {
    pub business_id: Option<BusinessId>,
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    pub max_price_cents: Option<u64>,
}

impl PublicCatalogFilter {
    /// Matches approved products only; other statuses never reach the public
    /// view regardless of the filter.
    pub fn matches(&self, product: &Product) -> bool {
        if product.status != ProductStatus::Approved {
            return false;
        }
        if let Some(business_id) = self.business_id {
            if product.business_id != business_id {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !name_contains(&product.name, search) {
                return false;
            }
        }
        if let Some(max) = self.max_price_cents {
            if product.price_cents > max {
                return false;
            }
        }
        true
    }
}

fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(&needle.to_lowercase())
}
