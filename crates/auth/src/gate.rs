//! The access gate: may this session see this view or perform this action?
//!
//! - No IO
//! - No panics
//! - No hidden state (pure policy check, evaluated fresh per request)

use serde::Serialize;

use crate::{AccessRequirement, SessionSnapshot};

/// Where unauthenticated sessions are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated sessions lacking division/role access are sent.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    DenyUnauthenticated,
    DenyUnauthorized,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Path the navigation layer must redirect to, or `None` to proceed.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::DenyUnauthenticated => Some(LOGIN_PATH),
            Self::DenyUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// The precedence rule that settled a decision, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    NotAuthenticated,
    Administrator,
    NoDivisionRequired,
    NotADivisionMember,
    RoleNotAccepted,
    MembershipAccepted,
}

impl DecisionRule {
    pub fn decision(self) -> AccessDecision {
        match self {
            Self::NotAuthenticated => AccessDecision::DenyUnauthenticated,
            Self::Administrator | Self::NoDivisionRequired | Self::MembershipAccepted => {
                AccessDecision::Allow
            }
            Self::NotADivisionMember | Self::RoleNotAccepted => AccessDecision::DenyUnauthorized,
        }
    }
}

/// Find the first precedence rule that applies.
pub fn decision_rule(session: &SessionSnapshot, requirement: &AccessRequirement) -> DecisionRule {
    if !session.is_authenticated() {
        return DecisionRule::NotAuthenticated;
    }
    if session.is_admin() {
        return DecisionRule::Administrator;
    }

    let (division_id, roles) = match requirement {
        AccessRequirement::Authenticated => return DecisionRule::NoDivisionRequired,
        AccessRequirement::Division { division_id, roles } => (division_id, roles),
    };

    // Authenticated with no resolved principal: no memberships to match.
    let Some(membership) = session.principal().and_then(|p| p.membership_in(division_id)) else {
        return DecisionRule::NotADivisionMember;
    };

    if roles.accepts(&membership.role) {
        DecisionRule::MembershipAccepted
    } else {
        DecisionRule::RoleNotAccepted
    }
}

/// Decide whether `session` satisfies `requirement`.
pub fn evaluate(session: &SessionSnapshot, requirement: &AccessRequirement) -> AccessDecision {
    decision_rule(session, requirement).decision()
}
