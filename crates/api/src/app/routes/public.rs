use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// Anonymous storefront listing: approved products from every business.
pub async fn list_public_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PublicCatalogQuery>,
) -> axum::response::Response {
    let filter = match query.into_filter() {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let items = services
        .catalog
        .list_approved_products(&filter)
        .into_iter()
        .map(dto::public_product_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
