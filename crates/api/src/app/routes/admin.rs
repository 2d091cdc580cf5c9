//! Administrator views (division management).

use axum::{
    Json, Router,
    extract::Extension,
    response::IntoResponse,
    routing::get,
};

use crate::authz;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/divisions", get(manage_divisions))
}

/// GET /admin/divisions
pub async fn manage_divisions(Extension(session): Extension<SessionContext>) -> axum::response::Response {
    if let Err(redirect) = authz::admit_admin(&session, "admin.divisions") {
        return redirect.into_response();
    }

    Json(serde_json::json!({
        "view": "admin_divisions",
    }))
    .into_response()
}
