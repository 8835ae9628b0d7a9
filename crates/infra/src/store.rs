//! Store abstractions and in-memory implementations.
//!
//! Persistence is an external collaborator; the traits here pin down the
//! read-your-writes surface the services need. The in-memory implementations
//! are for the demo binary and tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bazaar_accounts::User;
use bazaar_catalog::Product;
use bazaar_core::{BusinessId, ProductId, UserId};

/// Product persistence boundary.
pub trait ProductStore: Send + Sync {
    fn get(&self, id: ProductId) -> Option<Product>;
    fn upsert(&self, product: Product);
    /// Returns `true` if the product existed.
    fn remove(&self, id: ProductId) -> bool;
    fn list_business(&self, business_id: BusinessId) -> Vec<Product>;
    /// Cross-business listing (the public storefront filters this down).
    fn list_all(&self) -> Vec<Product>;
}

/// User persistence boundary.
pub trait UserStore: Send + Sync {
    fn get(&self, id: UserId) -> Option<User>;
    fn upsert(&self, user: User);
    /// Returns `true` if the user existed.
    fn remove(&self, id: UserId) -> bool;
    fn list_business(&self, business_id: BusinessId) -> Vec<User>;
    /// Lookup by case-insensitive username key (global uniqueness).
    fn find_by_username(&self, username_key: &str) -> Option<User>;
    /// Lookup by case-insensitive email key (global uniqueness).
    fn find_by_email(&self, email_key: &str) -> Option<User>;
}

impl<S: ProductStore + ?Sized> ProductStore for Arc<S> {
    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn upsert(&self, product: Product) {
        (**self).upsert(product)
    }

    fn remove(&self, id: ProductId) -> bool {
        (**self).remove(id)
    }

    fn list_business(&self, business_id: BusinessId) -> Vec<Product> {
        (**self).list_business(business_id)
    }

    fn list_all(&self) -> Vec<Product> {
        (**self).list_all()
    }
}

impl<S: UserStore + ?Sized> UserStore for Arc<S> {
    fn get(&self, id: UserId) -> Option<User> {
        (**self).get(id)
    }

    fn upsert(&self, user: User) {
        (**self).upsert(user)
    }

    fn remove(&self, id: UserId) -> bool {
        (**self).remove(id)
    }

    fn list_business(&self, business_id: BusinessId) -> Vec<User> {
        (**self).list_business(business_id)
    }

    fn find_by_username(&self, username_key: &str) -> Option<User> {
        (**self).find_by_username(username_key)
    }

    fn find_by_email(&self, email_key: &str) -> Option<User> {
        (**self).find_by_email(email_key)
    }
}

/// In-memory product store. Last write wins; no versioning.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, id: ProductId) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn upsert(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id, product);
        }
    }

    fn remove(&self, id: ProductId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(&id).is_some(),
            Err(_) => false,
        }
    }

    fn list_business(&self, business_id: BusinessId) -> Vec<Product> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values()
            .filter(|p| p.business_id == business_id)
            .cloned()
            .collect()
    }

    fn list_all(&self) -> Vec<Product> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values().cloned().collect()
    }
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn get(&self, id: UserId) -> Option<User> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn upsert(&self, user: User) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(user.id, user);
        }
    }

    fn remove(&self, id: UserId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(&id).is_some(),
            Err(_) => false,
        }
    }

    fn list_business(&self, business_id: BusinessId) -> Vec<User> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values()
            .filter(|u| u.business_id == business_id)
            .cloned()
            .collect()
    }

    fn find_by_username(&self, username_key: &str) -> Option<User> {
        let map = self.inner.read().ok()?;
        map.values()
            .find(|u| u.username_key() == username_key)
            .cloned()
    }

    fn find_by_email(&self, email_key: &str) -> Option<User> {
        let map = self.inner.read().ok()?;
        map.values()
            .find(|u| u.email_key().as_deref() == Some(email_key))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_accounts::NewUser;
    use bazaar_auth::Role;
    use bazaar_catalog::NewProduct;
    use chrono::Utc;

    fn product(business_id: BusinessId) -> Product {
        Product::create(
            business_id,
            UserId::new(),
            NewProduct {
                name: "Widget".to_string(),
                description: String::new(),
                price_cents: 100,
                image_url: String::new(),
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn products_are_read_your_writes() {
        let store = InMemoryProductStore::new();
        let p = product(BusinessId::new());
        store.upsert(p.clone());
        assert_eq!(store.get(p.id), Some(p.clone()));
        assert!(store.remove(p.id));
        assert_eq!(store.get(p.id), None);
        assert!(!store.remove(p.id));
    }

    #[test]
    fn business_listing_is_isolated() {
        let store = InMemoryProductStore::new();
        let biz_a = BusinessId::new();
        let biz_b = BusinessId::new();
        store.upsert(product(biz_a));
        store.upsert(product(biz_a));
        store.upsert(product(biz_b));

        assert_eq!(store.list_business(biz_a).len(), 2);
        assert_eq!(store.list_business(biz_b).len(), 1);
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn user_lookup_by_keys() {
        let store = InMemoryUserStore::new();
        let user = User::create(
            BusinessId::new(),
            NewUser {
                username: "Dave".to_string(),
                email: "Dave@Example.com".to_string(),
                display_name: String::new(),
                role: Role::Editor,
            },
            Utc::now(),
        )
        .unwrap();
        store.upsert(user.clone());

        assert_eq!(store.find_by_username("dave"), Some(user.clone()));
        assert_eq!(store.find_by_email("dave@example.com"), Some(user));
        assert_eq!(store.find_by_username("someone-else"), None);
    }
}
