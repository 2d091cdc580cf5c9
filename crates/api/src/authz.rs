//! API-side access guard for portal views and actions.
//!
//! Handlers declare an [`AccessRequirement`] and call [`admit`] before doing
//! anything else; the decision itself stays in `portal-auth`.

use axum::response::Redirect;

use portal_auth::{AccessDecision, AccessRequirement, UNAUTHORIZED_PATH, decision_rule};

use crate::context::SessionContext;

/// Gate a view/action for the current session.
///
/// Returns the redirect the client must follow when access is denied.
pub fn admit(
    session: &SessionContext,
    requirement: &AccessRequirement,
    view: &'static str,
) -> Result<(), Redirect> {
    let rule = decision_rule(session.snapshot(), requirement);
    let decision = rule.decision();
    let principal_id = session
        .snapshot()
        .principal()
        .map(|p| p.principal_id.to_string());

    match decision.redirect_target() {
        None => {
            tracing::debug!(view, ?rule, principal_id = principal_id.as_deref(), "access granted");
            Ok(())
        }
        Some(target) => {
            if decision == AccessDecision::DenyUnauthorized {
                tracing::info!(
                    view,
                    ?rule,
                    principal_id = principal_id.as_deref(),
                    division = requirement.division_id().map(|d| d.as_str()),
                    "access denied"
                );
            } else {
                tracing::debug!(view, "unauthenticated; redirecting to login");
            }
            Err(Redirect::to(target))
        }
    }
}

/// Gate an administrator-only view.
///
/// The administrator flag is a principal attribute, not a division, so no
/// membership (whatever its division is called) admits a non-administrator.
pub fn admit_admin(session: &SessionContext, view: &'static str) -> Result<(), Redirect> {
    admit(session, &AccessRequirement::authenticated(), view)?;

    if session.snapshot().is_admin() {
        return Ok(());
    }

    let principal_id = session
        .snapshot()
        .principal()
        .map(|p| p.principal_id.to_string());
    tracing::info!(view, principal_id = principal_id.as_deref(), "access denied: administrator required");
    Err(Redirect::to(UNAUTHORIZED_PATH))
}

#[cfg(test)]
mod tests {
    use axum::{http::header, response::IntoResponse};
    use chrono::{Duration, Utc};
    use portal_auth::{DivisionId, DivisionMembership, PrincipalId, Role, SessionClaims};

    use super::*;

    fn session(divisions: Vec<DivisionMembership>) -> SessionContext {
        session_with_admin(false, divisions)
    }

    fn session_with_admin(is_admin: bool, divisions: Vec<DivisionMembership>) -> SessionContext {
        let now = Utc::now();
        SessionContext::from_claims(&SessionClaims {
            sub: PrincipalId::new(),
            name: None,
            is_admin,
            divisions,
            issued_at: now,
            expires_at: now + Duration::minutes(5),
        })
    }

    fn location(redirect: Redirect) -> String {
        let res = redirect.into_response();
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        let err = admit(&SessionContext::anonymous(), &AccessRequirement::authenticated(), "dashboard")
            .unwrap_err();
        assert_eq!(location(err), "/login");
    }

    #[test]
    fn non_member_is_sent_to_unauthorized() {
        let s = session(vec![DivisionMembership::new(
            DivisionId::from_static("hr"),
            Role::new("manager"),
        )]);
        let err = admit(&s, &AccessRequirement::member_of(DivisionId::from_static("fin")), "division")
            .unwrap_err();
        assert_eq!(location(err), "/unauthorized");
    }

    #[test]
    fn member_is_admitted() {
        let s = session(vec![DivisionMembership::new(
            DivisionId::from_static("fin"),
            Role::new("member"),
        )]);
        assert!(admit(&s, &AccessRequirement::member_of(DivisionId::from_static("fin")), "division").is_ok());
    }

    #[test]
    fn admin_views_require_the_administrator_flag() {
        let err = admit_admin(&SessionContext::anonymous(), "admin").unwrap_err();
        assert_eq!(location(err), "/login");

        // A division that happens to be called "admin" grants nothing here.
        let s = session(vec![DivisionMembership::new(
            DivisionId::from_static("admin"),
            Role::new("manager"),
        )]);
        let err = admit_admin(&s, "admin").unwrap_err();
        assert_eq!(location(err), "/unauthorized");

        assert!(admit_admin(&session_with_admin(true, vec![]), "admin").is_ok());
    }
}
