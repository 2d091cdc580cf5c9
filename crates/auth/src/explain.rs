//! Explanations of access decisions (audit/debug surface).
//!
//! Answers "why was this view allowed/denied?" for the current session. The
//! decision itself always comes from [`crate::gate`], so an explanation can
//! never disagree with what the guard actually did.

use serde::Serialize;

use portal_core::PrincipalId;

use crate::{
    AccessDecision, AccessRequirement, DecisionRule, DivisionMembership, RoleConstraint,
    SessionSnapshot, decision_rule,
};

/// Detailed explanation of a gate decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    pub decision: AccessDecision,
    pub rule: DecisionRule,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Where the caller would be redirected, if denied.
    pub redirect_to: Option<&'static str>,

    pub requirement: AccessRequirement,

    /// `None` when the session carries no resolved principal.
    pub principal: Option<PrincipalState>,

    /// Empty when access is granted.
    pub suggestions: Vec<String>,
}

/// State of the principal the gate looked at.
#[derive(Debug, Clone, Serialize)]
pub struct PrincipalState {
    pub principal_id: PrincipalId,
    pub is_admin: bool,
    pub memberships: Vec<DivisionMembership>,
}

/// Explain why `session` is allowed or denied under `requirement`.
pub fn explain_access(session: &SessionSnapshot, requirement: &AccessRequirement) -> AccessExplanation {
    let rule = decision_rule(session, requirement);
    let decision = rule.decision();

    let principal = session.principal().map(|p| PrincipalState {
        principal_id: p.principal_id,
        is_admin: p.is_admin,
        memberships: p.memberships.clone(),
    });

    let (reason, suggestions) = describe(session, requirement, rule);

    AccessExplanation {
        decision,
        rule,
        reason,
        redirect_to: decision.redirect_target(),
        requirement: requirement.clone(),
        principal,
        suggestions,
    }
}

fn describe(
    session: &SessionSnapshot,
    requirement: &AccessRequirement,
    rule: DecisionRule,
) -> (String, Vec<String>) {
    let division = requirement
        .division_id()
        .map(|d| d.as_str().to_string())
        .unwrap_or_default();

    match rule {
        DecisionRule::NotAuthenticated => (
            "Session is not authenticated".to_string(),
            vec!["Sign in with your Microsoft account".to_string()],
        ),
        DecisionRule::Administrator => (
            "Principal is an administrator; division and role checks are skipped".to_string(),
            Vec::new(),
        ),
        DecisionRule::NoDivisionRequired => (
            "Resource only requires an authenticated session".to_string(),
            Vec::new(),
        ),
        DecisionRule::NotADivisionMember => {
            let reason = if session.principal().is_none() {
                format!("Session has no resolved user record, so no membership in division '{division}'")
            } else {
                format!("Principal is not a member of division '{division}'")
            };
            (
                reason,
                vec![format!(
                    "Ask an administrator to add you to division '{division}'"
                )],
            )
        }
        DecisionRule::RoleNotAccepted => {
            let held = session
                .principal()
                .and_then(|p| requirement.division_id().and_then(|d| p.membership_in(d)))
                .map(|m| m.role.as_str().to_string())
                .unwrap_or_default();
            let accepted = accepted_roles(requirement);
            (
                format!(
                    "Role '{held}' in division '{division}' is not one of [{accepted}]"
                ),
                vec![format!(
                    "Ask a division manager to grant one of [{accepted}] in '{division}'"
                )],
            )
        }
        DecisionRule::MembershipAccepted => (
            format!("Principal's membership in division '{division}' satisfies the requirement"),
            Vec::new(),
        ),
    }
}

fn accepted_roles(requirement: &AccessRequirement) -> String {
    match requirement {
        AccessRequirement::Division {
            roles: RoleConstraint::OneOf(roles),
            ..
        } => roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", "),
        _ => String::new(),
    }
}
