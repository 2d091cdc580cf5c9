use serde::{Deserialize, Serialize};

use portal_core::{DivisionId, PrincipalId};

use crate::Role;

/// A principal's membership in one division.
///
/// A membership references exactly one division and carries exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisionMembership {
    pub division_id: DivisionId,
    pub role: Role,
}

impl DivisionMembership {
    pub fn new(division_id: DivisionId, role: Role) -> Self {
        Self { division_id, role }
    }
}

/// A fully resolved principal for authorization decisions.
///
/// Construction is decoupled from the identity provider: the API derives it
/// from validated session claims. The gate only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub is_admin: bool,
    #[serde(default)]
    pub memberships: Vec<DivisionMembership>,
}

impl Principal {
    pub fn new(principal_id: PrincipalId) -> Self {
        Self {
            principal_id,
            is_admin: false,
            memberships: Vec::new(),
        }
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn with_membership(mut self, division_id: DivisionId, role: Role) -> Self {
        self.memberships.push(DivisionMembership::new(division_id, role));
        self
    }

    /// First membership whose division matches.
    ///
    /// At most one membership per division is expected; if the store ever
    /// returns more, later entries are never consulted.
    pub fn membership_in(&self, division_id: &DivisionId) -> Option<&DivisionMembership> {
        self.memberships.iter().find(|m| &m.division_id == division_id)
    }
}

/// Authentication state for a single request, as handed to the gate.
///
/// `is_authenticated` and `principal` come from the session provider and are
/// kept separate on purpose: a provider may report an authenticated session
/// whose user record has not resolved. The gate treats that as a
/// non-administrator with no memberships.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    is_authenticated: bool,
    principal: Option<Principal>,
}

impl SessionSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(principal: Principal) -> Self {
        Self {
            is_authenticated: true,
            principal: Some(principal),
        }
    }

    /// Snapshot from raw provider fields.
    ///
    /// A principal reported alongside `is_authenticated == false` is dropped.
    pub fn from_parts(is_authenticated: bool, principal: Option<Principal>) -> Self {
        Self {
            is_authenticated,
            principal: principal.filter(|_| is_authenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.principal.as_ref().is_some_and(|p| p.is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fin() -> DivisionId {
        DivisionId::from_static("fin")
    }

    #[test]
    fn membership_lookup_takes_first_match() {
        let principal = Principal::new(PrincipalId::new())
            .with_membership(DivisionId::from_static("hr"), Role::new("member"))
            .with_membership(fin(), Role::new("member"))
            .with_membership(fin(), Role::new("manager"));

        let m = principal.membership_in(&fin()).unwrap();
        assert_eq!(m.role.as_str(), "member");
        assert!(principal.membership_in(&DivisionId::from_static("ops")).is_none());
    }

    #[test]
    fn unauthenticated_snapshot_drops_principal() {
        let principal = Principal::new(PrincipalId::new()).with_admin(true);
        let session = SessionSnapshot::from_parts(false, Some(principal));
        assert!(!session.is_authenticated());
        assert!(session.principal().is_none());
        assert!(!session.is_admin());
    }

    #[test]
    fn authenticated_without_principal_is_not_admin() {
        let session = SessionSnapshot::from_parts(true, None);
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn principal_deserializes_without_memberships() {
        let id = PrincipalId::new();
        let json = serde_json::json!({ "principal_id": id, "is_admin": false });
        let principal: Principal = serde_json::from_value(json).unwrap();
        assert_eq!(principal, Principal::new(id));
    }
}
