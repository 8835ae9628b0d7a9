use chrono::Utc;

use bazaar_assistant::{CatalogSnapshot, SnapshotItem};
use bazaar_auth::{authorize, ensure_same_business, Action, Actor, CapabilityMatrix};
use bazaar_catalog::{CatalogFilter, NewProduct, Product, ProductStatus, ProductUpdate, PublicCatalogFilter};
use bazaar_core::{DomainError, DomainResult, ProductId};

use crate::store::ProductStore;

/// Product workflow and catalog queries.
///
/// Every mutating operation runs capability check → business check → domain
/// transition → single write. A failed check leaves the store untouched.
pub struct CatalogService<S> {
    store: S,
    matrix: CapabilityMatrix,
}

impl<S: ProductStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            matrix: CapabilityMatrix::default(),
        }
    }

    /// Swap in a different policy variant.
    pub fn with_matrix(store: S, matrix: CapabilityMatrix) -> Self {
        Self { store, matrix }
    }

    pub fn create_product(&self, actor: &Actor, input: NewProduct) -> DomainResult<Product> {
        authorize(&self.matrix, actor, Action::CreateProduct)?;

        let product = Product::create(actor.business_id, actor.user_id, input, Utc::now())?;
        self.store.upsert(product.clone());

        tracing::info!(
            product_id = %product.id,
            business_id = %product.business_id,
            "product created"
        );
        Ok(product)
    }

    pub fn update_product(
        &self,
        actor: &Actor,
        id: ProductId,
        update: ProductUpdate,
    ) -> DomainResult<Product> {
        authorize(&self.matrix, actor, Action::EditProduct)?;

        let mut product = self.store.get(id).ok_or(DomainError::NotFound)?;
        ensure_same_business(actor, product.business_id)?;

        product.apply_update(update, Utc::now())?;
        self.store.upsert(product.clone());
        Ok(product)
    }

    pub fn submit_for_approval(&self, actor: &Actor, id: ProductId) -> DomainResult<Product> {
        authorize(&self.matrix, actor, Action::SubmitProduct)?;

        let mut product = self.store.get(id).ok_or(DomainError::NotFound)?;
        ensure_same_business(actor, product.business_id)?;

        product.submit_for_approval(Utc::now())?;
        self.store.upsert(product.clone());

        tracing::info!(product_id = %product.id, "product submitted for approval");
        Ok(product)
    }

    pub fn approve_product(&self, actor: &Actor, id: ProductId) -> DomainResult<Product> {
        authorize(&self.matrix, actor, Action::ApproveProduct)?;

        let mut product = self.store.get(id).ok_or(DomainError::NotFound)?;
        ensure_same_business(actor, product.business_id)?;

        product.approve(actor.user_id, Utc::now())?;
        self.store.upsert(product.clone());

        tracing::info!(product_id = %product.id, approver = %actor.user_id, "product approved");
        Ok(product)
    }

    pub fn delete_product(&self, actor: &Actor, id: ProductId) -> DomainResult<()> {
        authorize(&self.matrix, actor, Action::DeleteProduct)?;

        let product = self.store.get(id).ok_or(DomainError::NotFound)?;
        ensure_same_business(actor, product.business_id)?;

        self.store.remove(id);
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Fetch one product in the management view.
    pub fn get_product(&self, actor: &Actor, id: ProductId) -> DomainResult<Product> {
        authorize(&self.matrix, actor, Action::ViewBusinessProducts)?;

        let product = self.store.get(id).ok_or(DomainError::NotFound)?;
        ensure_same_business(actor, product.business_id)?;
        Ok(product)
    }

    /// Public storefront view: approved products only, any business, no actor.
    pub fn list_approved_products(&self, filter: &PublicCatalogFilter) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .store
            .list_all()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        products
    }

    /// Business-management view: all statuses, scoped to the actor's business.
    ///
    /// A `viewer` is rejected here at the call boundary, not given an empty
    /// list.
    pub fn list_business_products(
        &self,
        actor: &Actor,
        filter: &CatalogFilter,
    ) -> DomainResult<Vec<Product>> {
        authorize(&self.matrix, actor, Action::ViewBusinessProducts)?;
        filter.validate()?;

        let mut products: Vec<Product> = self
            .store
            .list_business(actor.business_id)
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();

        // Newest first unless the filter asks for something else.
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        filter.sort(&mut products);
        Ok(products)
    }

    /// The read contract for the assistant: approved products only.
    pub fn approved_catalog_snapshot(&self) -> CatalogSnapshot {
        let items = self
            .store
            .list_all()
            .into_iter()
            .filter(|p| p.status == ProductStatus::Approved)
            .map(|p| SnapshotItem {
                id: p.id,
                name: p.name,
                price_cents: p.price_cents,
                description: p.description,
            })
            .collect();
        CatalogSnapshot { items }
    }
}
