use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto;
use crate::app::services::AppServices;

/// Shopping assistant, grounded in the approved catalog. Anonymous; the reply
/// degrades to a static message rather than failing.
pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    let snapshot = services.catalog.approved_catalog_snapshot();
    let reply = services
        .assistant
        .answer(&body.history, &body.message, &snapshot);

    (StatusCode::OK, Json(serde_json::json!({ "reply": reply }))).into_response()
}
