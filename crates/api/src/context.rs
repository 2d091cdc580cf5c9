use chrono::{DateTime, Utc};

use portal_auth::{SessionClaims, SessionSnapshot};

/// Session context for a request.
///
/// Always present on portal routes: the session middleware inserts an
/// anonymous context when no valid token was presented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    snapshot: SessionSnapshot,
    display_name: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_claims(claims: &SessionClaims) -> Self {
        Self {
            snapshot: SessionSnapshot::authenticated(claims.to_principal()),
            display_name: claims.name.clone(),
            expires_at: Some(claims.expires_at),
        }
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}
