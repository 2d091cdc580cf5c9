//! Division-scoped views: overview, KPI tracking, asset registry.
//!
//! Every handler runs the gate before looking at its inputs, so callers that
//! would be redirected never see validation errors.

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use portal_auth::{AccessRequirement, DivisionId, Role};

use crate::app::{dto::RecordKpiRequest, errors};
use crate::authz;
use crate::context::SessionContext;

/// Roles allowed to record KPI values for a division.
const KPI_EDITOR_ROLES: [&str; 2] = ["manager", "lead"];

pub fn router() -> Router {
    Router::new()
        .route("/:division_id", get(overview))
        .route("/:division_id/kpis", get(list_kpis).post(record_kpi))
        .route("/:division_id/assets", get(list_assets))
}

fn kpi_editors() -> impl Iterator<Item = Role> {
    KPI_EDITOR_ROLES.into_iter().map(Role::new)
}

/// Parse the path segment and admit the session for `requirement`.
///
/// A malformed id is only reported once the session is known to be signed
/// in; anonymous callers get the login redirect either way.
fn admit_division(
    session: &SessionContext,
    raw: String,
    requirement: impl FnOnce(DivisionId) -> AccessRequirement,
    view: &'static str,
) -> Result<DivisionId, axum::response::Response> {
    match DivisionId::parse(raw) {
        Ok(division_id) => {
            authz::admit(session, &requirement(division_id.clone()), view)
                .map_err(IntoResponse::into_response)?;
            Ok(division_id)
        }
        Err(e) => {
            authz::admit(session, &AccessRequirement::authenticated(), view)
                .map_err(IntoResponse::into_response)?;
            Err(errors::invalid_division_id(e))
        }
    }
}

/// GET /divisions/:division_id
pub async fn overview(
    Extension(session): Extension<SessionContext>,
    Path(division_id): Path<String>,
) -> axum::response::Response {
    let division_id = match admit_division(&session, division_id, AccessRequirement::member_of, "division") {
        Ok(id) => id,
        Err(res) => return res,
    };

    let role = session
        .snapshot()
        .principal()
        .and_then(|p| p.membership_in(&division_id))
        .map(|m| m.role.as_str().to_string());

    Json(serde_json::json!({
        "view": "division",
        "division_id": division_id,
        // `null` for administrators viewing a division they do not belong to.
        "role": role,
    }))
    .into_response()
}

/// GET /divisions/:division_id/kpis
pub async fn list_kpis(
    Extension(session): Extension<SessionContext>,
    Path(division_id): Path<String>,
) -> axum::response::Response {
    let division_id = match admit_division(&session, division_id, AccessRequirement::member_of, "kpis") {
        Ok(id) => id,
        Err(res) => return res,
    };

    let requirement = AccessRequirement::role_in(division_id.clone(), kpi_editors());
    let can_edit = portal_auth::evaluate(session.snapshot(), &requirement).is_allowed();

    Json(serde_json::json!({
        "view": "kpis",
        "division_id": division_id,
        "can_edit": can_edit,
    }))
    .into_response()
}

/// POST /divisions/:division_id/kpis
///
/// The body rejection is taken as a value so that it is only surfaced to
/// callers the gate admits.
pub async fn record_kpi(
    Extension(session): Extension<SessionContext>,
    Path(division_id): Path<String>,
    body: Result<Json<RecordKpiRequest>, JsonRejection>,
) -> axum::response::Response {
    let division_id = match admit_division(
        &session,
        division_id,
        |id| AccessRequirement::role_in(id, kpi_editors()),
        "kpis.record",
    ) {
        Ok(id) => id,
        Err(res) => return res,
    };

    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text());
        }
    };

    if req.kpi.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "kpi must not be empty");
    }
    if !req.value.is_finite() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "value must be a finite number");
    }

    tracing::info!(division = %division_id, kpi = %req.kpi, "kpi value accepted");

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "division_id": division_id,
            "kpi": req.kpi,
            "value": req.value,
            "period": req.period,
        })),
    )
        .into_response()
}

/// GET /divisions/:division_id/assets
pub async fn list_assets(
    Extension(session): Extension<SessionContext>,
    Path(division_id): Path<String>,
) -> axum::response::Response {
    let division_id = match admit_division(&session, division_id, AccessRequirement::member_of, "assets") {
        Ok(id) => id,
        Err(res) => return res,
    };

    Json(serde_json::json!({
        "view": "assets",
        "division_id": division_id,
    }))
    .into_response()
}
