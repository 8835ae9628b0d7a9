use axum::{routing::get, Router};

pub mod chat;
pub mod products;
pub mod public;
pub mod system;
pub mod users;

/// Router for all authenticated (business-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/products", products::router())
        .nest("/users", users::router())
}
