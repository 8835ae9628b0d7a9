//! Demo dataset for the API binary and tests.
//!
//! One business, one user per role, and products covering every lifecycle
//! status. Everything is built through the domain constructors and transitions
//! so the seeded state satisfies the same invariants as live data.

use chrono::Utc;

use bazaar_accounts::{Business, NewUser, User};
use bazaar_auth::Role;
use bazaar_catalog::{NewProduct, Product};

use crate::store::{ProductStore, UserStore};

/// Handles to the seeded demo records.
pub struct SeedData {
    pub business: Business,
    pub admin: User,
    pub editor: User,
    pub approver: User,
    pub viewer: User,
    pub products: Vec<Product>,
}

/// Provision the demo dataset into the given stores.
pub fn seed_demo_data(products: &impl ProductStore, users: &impl UserStore) -> SeedData {
    let now = Utc::now();

    let business = Business::create("Bazaar HQ", now).expect("seed business name is valid");

    let mk_user = |username: &str, display_name: &str, role: Role| -> User {
        let user = User::create(
            business.id,
            NewUser {
                username: username.to_string(),
                email: format!("{username}@bazaar.test"),
                display_name: display_name.to_string(),
                role,
            },
            now,
        )
        .expect("seed user input is valid");
        users.upsert(user.clone());
        user
    };

    let admin = mk_user("admin", "Admin User", Role::Admin);
    let editor = mk_user("editor", "Editor Dave", Role::Editor);
    let approver = mk_user("approver", "Approver Alice", Role::Approver);
    let viewer = mk_user("viewer", "Public Viewer", Role::Viewer);

    let mk_product = |name: &str, description: &str, price_cents: u64| -> Product {
        Product::create(
            business.id,
            editor.id,
            NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price_cents,
                image_url: String::new(),
            },
            now,
        )
        .expect("seed product input is valid")
    };

    let mut burger = mk_product("Deluxe Burger", "Double patty, special sauce, sesame bun.", 1299);
    burger.submit_for_approval(now).expect("draft submits");
    burger.approve(approver.id, now).expect("pending approves");

    let mut pizza = mk_product("Vegan Pizza", "Fresh vegetables, vegan cheese, thin crust.", 1550);
    pizza.submit_for_approval(now).expect("draft submits");
    pizza.approve(approver.id, now).expect("pending approves");

    let sushi = mk_product("Sushi Platter", "Assorted nigiri and rolls.", 4500);

    let mut pasta = mk_product("Pasta Carbonara", "Authentic Italian recipe with guanciale.", 1800);
    pasta.submit_for_approval(now).expect("draft submits");

    let seeded = vec![burger, pizza, sushi, pasta];
    for product in &seeded {
        products.upsert(product.clone());
    }

    tracing::info!(
        business = %business.name,
        users = 4,
        products = seeded.len(),
        "demo data seeded"
    );

    SeedData {
        business,
        admin,
        editor,
        approver,
        viewer,
        products: seeded,
    }
}
