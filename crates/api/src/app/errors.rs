use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use portal_core::{DivisionId, DomainError};

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

pub fn invalid_division_id(err: DomainError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_division_id", err.to_string())
}

pub fn parse_division_id(raw: String) -> Result<DivisionId, axum::response::Response> {
    DivisionId::parse(raw).map_err(invalid_division_id)
}
