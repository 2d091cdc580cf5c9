use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_auth::{AccessRequirement, DivisionMembership, Role};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// `GET /access/explain?division=fin&roles=manager,lead`
#[derive(Debug, Default, Deserialize)]
pub struct ExplainAccessQuery {
    pub division: Option<String>,
    /// Comma-separated role list; blank entries are ignored.
    pub roles: Option<String>,
}

impl ExplainAccessQuery {
    pub fn to_requirement(&self) -> Result<AccessRequirement, axum::response::Response> {
        let division = match self.division.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(errors::parse_division_id(raw.to_string())?),
        };

        let roles = self
            .roles
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(|r| Role::new(r.to_string()));

        Ok(AccessRequirement::from_parts(division, roles))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordKpiRequest {
    pub kpi: String,
    pub value: f64,
    #[serde(default)]
    pub period: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub principal_id: Option<String>,
    pub name: Option<String>,
    pub is_admin: bool,
    pub divisions: Vec<DivisionMembership>,
    pub expires_at: Option<DateTime<Utc>>,
    /// e.g. "in 9 minutes"
    pub expires: Option<String>,
}

#[cfg(test)]
mod tests {
    use portal_auth::{DivisionId, RoleConstraint};

    use super::*;

    #[test]
    fn empty_query_requires_authentication_only() {
        let q = ExplainAccessQuery::default();
        assert_eq!(q.to_requirement().unwrap(), AccessRequirement::Authenticated);
    }

    #[test]
    fn roles_without_division_are_ignored() {
        let q = ExplainAccessQuery {
            division: Some("  ".to_string()),
            roles: Some("manager".to_string()),
        };
        assert_eq!(q.to_requirement().unwrap(), AccessRequirement::Authenticated);
    }

    #[test]
    fn division_and_roles_are_parsed() {
        let q = ExplainAccessQuery {
            division: Some("fin".to_string()),
            roles: Some("manager, ,lead,".to_string()),
        };
        assert_eq!(
            q.to_requirement().unwrap(),
            AccessRequirement::Division {
                division_id: DivisionId::from_static("fin"),
                roles: RoleConstraint::OneOf(vec![Role::new("manager"), Role::new("lead")]),
            }
        );
    }
}
