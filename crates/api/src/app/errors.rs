use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bazaar_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Unauthorized => {
            json_error(StatusCode::FORBIDDEN, "forbidden", "action not permitted for this role")
        }
        DomainError::CrossTenant => json_error(
            StatusCode::FORBIDDEN,
            "cross_business",
            "resource belongs to another business",
        ),
        DomainError::SelfDeletionForbidden => json_error(
            StatusCode::FORBIDDEN,
            "self_deletion_forbidden",
            "users cannot delete their own account",
        ),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::IllegalTransition(msg) => {
            json_error(StatusCode::CONFLICT, "illegal_transition", msg)
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
