use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(
    Extension(business): Extension<crate::context::BusinessContext>,
    Extension(actor): Extension<crate::context::ActorContext>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "business_id": business.business_id().to_string(),
        "user_id": actor.user_id().to_string(),
        "role": actor.role().as_str(),
    }))
}
