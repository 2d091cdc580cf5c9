//! What a protected view or action demands of the current session.

use serde::Serialize;

use portal_core::DivisionId;

use crate::Role;

/// Which roles inside a division are acceptable.
///
/// An empty role list is never a constraint: [`RoleConstraint::one_of`]
/// normalises it to [`RoleConstraint::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "roles", rename_all = "snake_case")]
pub enum RoleConstraint {
    /// Any membership in the division is enough.
    #[default]
    Any,
    /// The membership's role must be one of these (order preserved, no duplicates).
    OneOf(Vec<Role>),
}

impl RoleConstraint {
    pub fn one_of<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        let mut accepted: Vec<Role> = Vec::new();
        for role in roles {
            if !accepted.contains(&role) {
                accepted.push(role);
            }
        }

        if accepted.is_empty() {
            Self::Any
        } else {
            Self::OneOf(accepted)
        }
    }

    pub fn accepts(&self, role: &Role) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf(roles) => roles.contains(role),
        }
    }
}

/// Policy declared by a protected resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessRequirement {
    /// Any authenticated session.
    #[default]
    Authenticated,
    /// Membership in `division_id`, with a role accepted by `roles`.
    Division {
        division_id: DivisionId,
        roles: RoleConstraint,
    },
}

impl AccessRequirement {
    pub fn authenticated() -> Self {
        Self::Authenticated
    }

    /// Any role inside `division_id`.
    pub fn member_of(division_id: DivisionId) -> Self {
        Self::Division {
            division_id,
            roles: RoleConstraint::Any,
        }
    }

    /// One of `roles` inside `division_id` (empty `roles` means any role).
    pub fn role_in<I>(division_id: DivisionId, roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self::Division {
            division_id,
            roles: RoleConstraint::one_of(roles),
        }
    }

    /// Requirement from the loose "optional division + role list" shape that
    /// routes declare. Roles are ignored when no division is given.
    pub fn from_parts<I>(division_id: Option<DivisionId>, roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        match division_id {
            None => Self::Authenticated,
            Some(division_id) => Self::role_in(division_id, roles),
        }
    }

    pub fn division_id(&self) -> Option<&DivisionId> {
        match self {
            Self::Authenticated => None,
            Self::Division { division_id, .. } => Some(division_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fin() -> DivisionId {
        DivisionId::from_static("fin")
    }

    #[test]
    fn empty_role_list_means_any_role() {
        assert_eq!(RoleConstraint::one_of(Vec::new()), RoleConstraint::Any);
        assert!(RoleConstraint::one_of(Vec::new()).accepts(&Role::new("member")));
    }

    #[test]
    fn one_of_deduplicates_and_keeps_order() {
        let c = RoleConstraint::one_of([Role::new("manager"), Role::new("lead"), Role::new("manager")]);
        assert_eq!(c, RoleConstraint::OneOf(vec![Role::new("manager"), Role::new("lead")]));
        assert!(c.accepts(&Role::new("lead")));
        assert!(!c.accepts(&Role::new("member")));
    }

    #[test]
    fn from_parts_ignores_roles_without_division() {
        let req = AccessRequirement::from_parts(None, [Role::new("manager")]);
        assert_eq!(req, AccessRequirement::Authenticated);
        assert!(req.division_id().is_none());
    }

    #[test]
    fn from_parts_with_division_and_no_roles_is_membership() {
        let req = AccessRequirement::from_parts(Some(fin()), Vec::new());
        assert_eq!(req, AccessRequirement::member_of(fin()));
        assert_eq!(req.division_id(), Some(&fin()));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let req = AccessRequirement::role_in(fin(), [Role::new("manager")]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["kind"], "division");
        assert_eq!(json["division_id"], "fin");
        assert_eq!(json["roles"]["kind"], "one_of");
        assert_eq!(json["roles"]["roles"][0], "manager");
    }
}
