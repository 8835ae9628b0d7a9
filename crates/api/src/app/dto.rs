use serde::Deserialize;

use bazaar_accounts::{NewUser, User};
use bazaar_auth::Role;
use bazaar_catalog::{CatalogFilter, NewProduct, Product, ProductUpdate, PublicCatalogFilter};
use bazaar_core::{BusinessId, DomainResult, DomainError};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: u64,
    #[serde(default)]
    pub image_url: String,
}

impl CreateProductRequest {
    pub fn into_domain(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<u64>,
    pub image_url: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_domain(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub role: Role,
}

impl CreateUserRequest {
    pub fn into_domain(self) -> NewUser {
        NewUser {
            username: self.username,
            email: self.email,
            display_name: self.display_name,
            role: self.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<String>,
}

/// Query parameters for the business-management product list.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub status: Option<String>,
    pub q: Option<String>,
    pub min_price_cents: Option<u64>,
    pub max_price_cents: Option<u64>,
    pub ordering: Option<String>,
}

impl CatalogQuery {
    pub fn into_filter(self) -> DomainResult<CatalogFilter> {
        Ok(CatalogFilter {
            status: self.status.as_deref().map(str::parse).transpose()?,
            search: self.q,
            min_price_cents: self.min_price_cents,
            max_price_cents: self.max_price_cents,
            ordering: self.ordering.as_deref().map(str::parse).transpose()?,
        })
    }
}

/// Query parameters for the public storefront list.
#[derive(Debug, Default, Deserialize)]
pub struct PublicCatalogQuery {
    pub business_id: Option<String>,
    pub q: Option<String>,
    pub max_price_cents: Option<u64>,
}

impl PublicCatalogQuery {
    pub fn into_filter(self) -> DomainResult<PublicCatalogFilter> {
        let business_id = self
            .business_id
            .as_deref()
            .map(str::parse::<BusinessId>)
            .transpose()
            .map_err(|_| DomainError::validation("invalid business_id"))?;
        Ok(PublicCatalogFilter {
            business_id,
            search: self.q,
            max_price_cents: self.max_price_cents,
        })
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.to_string(),
        "business_id": p.business_id.to_string(),
        "created_by": p.created_by.to_string(),
        "name": p.name,
        "description": p.description,
        "price_cents": p.price_cents,
        "image_url": p.image_url,
        "status": p.status.as_str(),
        "approved_by": p.approved_by.map(|id| id.to_string()),
        "created_at": p.created_at.to_rfc3339(),
        "updated_at": p.updated_at.to_rfc3339(),
    })
}

/// Public view of a product: no workflow or attribution fields.
pub fn public_product_to_json(p: Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.to_string(),
        "business_id": p.business_id.to_string(),
        "name": p.name,
        "description": p.description,
        "price_cents": p.price_cents,
        "image_url": p.image_url,
    })
}

pub fn user_to_json(u: User) -> serde_json::Value {
    serde_json::json!({
        "id": u.id.to_string(),
        "username": u.username,
        "email": u.email,
        "display_name": u.display_name,
        "role": u.role.as_str(),
        "business_id": u.business_id.to_string(),
        "created_at": u.created_at.to_rfc3339(),
    })
}
