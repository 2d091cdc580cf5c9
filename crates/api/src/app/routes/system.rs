use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use portal_auth::{AccessRequirement, LOGIN_PATH};
use portal_core::relative_time;

use crate::app::{dto::WhoAmIResponse, errors};
use crate::authz;
use crate::context::SessionContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Login view descriptor; the Microsoft sign-in redirect itself is owned by
/// the identity provider.
pub async fn login(Extension(session): Extension<SessionContext>) -> axum::response::Response {
    Json(serde_json::json!({
        "view": "login",
        "path": LOGIN_PATH,
        "provider": "microsoft",
        "authenticated": session.snapshot().is_authenticated(),
    }))
    .into_response()
}

pub async fn unauthorized() -> axum::response::Response {
    errors::json_error(
        StatusCode::FORBIDDEN,
        "unauthorized",
        "you do not have access to this page",
    )
}

pub async fn dashboard(Extension(session): Extension<SessionContext>) -> axum::response::Response {
    if let Err(redirect) = authz::admit(&session, &AccessRequirement::authenticated(), "dashboard") {
        return redirect.into_response();
    }

    let divisions: Vec<&str> = session
        .snapshot()
        .principal()
        .map(|p| p.memberships.iter().map(|m| m.division_id.as_str()).collect())
        .unwrap_or_default();

    Json(serde_json::json!({
        "view": "dashboard",
        "divisions": divisions,
    }))
    .into_response()
}

pub async fn whoami(Extension(session): Extension<SessionContext>) -> axum::response::Response {
    if let Err(redirect) = authz::admit(&session, &AccessRequirement::authenticated(), "whoami") {
        return redirect.into_response();
    }

    let principal = session.snapshot().principal();
    let now = Utc::now();

    Json(WhoAmIResponse {
        principal_id: principal.map(|p| p.principal_id.to_string()),
        name: session.display_name().map(str::to_string),
        is_admin: session.snapshot().is_admin(),
        divisions: principal.map(|p| p.memberships.clone()).unwrap_or_default(),
        expires_at: session.expires_at(),
        expires: session.expires_at().map(|at| relative_time(at, now)),
    })
    .into_response()
}
