//! Access audit endpoint for "why was I redirected?" questions.

use axum::{
    Json, Router,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
};

use portal_auth::explain_access;

use crate::app::dto::ExplainAccessQuery;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/explain", get(explain))
}

/// GET /access/explain?division=<id>&roles=<a,b>
///
/// Explains the gate's decision for the *current* session; it is not itself
/// gated, so anonymous callers learn that they need to sign in.
pub async fn explain(
    Extension(session): Extension<SessionContext>,
    Query(query): Query<ExplainAccessQuery>,
) -> axum::response::Response {
    let requirement = match query.to_requirement() {
        Ok(r) => r,
        Err(res) => return res,
    };

    Json(explain_access(session.snapshot(), &requirement)).into_response()
}
