//! `portal-auth` — pure authentication/authorization boundary for the portal.
//!
//! This crate is intentionally decoupled from HTTP and storage: the identity
//! provider issues tokens, the API resolves them into a [`SessionSnapshot`],
//! and the access gate decides what that session may see.

pub mod claims;
pub mod explain;
pub mod gate;
pub mod principal;
pub mod requirement;
pub mod roles;

pub use claims::{
    Hs256SessionValidator, SessionClaims, SessionValidator, TokenValidationError, validate_claims,
};
pub use explain::{AccessExplanation, PrincipalState, explain_access};
pub use gate::{AccessDecision, DecisionRule, LOGIN_PATH, UNAUTHORIZED_PATH, decision_rule, evaluate};
pub use principal::{DivisionMembership, Principal, SessionSnapshot};
pub use requirement::{AccessRequirement, RoleConstraint};
pub use roles::Role;

pub use portal_core::{DivisionId, PrincipalId};
