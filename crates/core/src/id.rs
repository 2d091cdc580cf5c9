//! Strongly-typed identifiers used across the portal.

use core::str::FromStr;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an authenticated principal (the signed-in account).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PrincipalId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("PrincipalId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Identifier of a division (organizational unit), e.g. `"fin"` or `"hr"`.
///
/// Division ids are opaque short codes owned by the hosted data store. They
/// are compared byte-for-byte, so blank or whitespace-padded values are
/// rejected rather than normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DivisionId(Cow<'static, str>);

impl DivisionId {
    /// Build a division id, rejecting blank or whitespace-padded input.
    pub fn parse(value: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("DivisionId: must not be empty"));
        }
        if value.trim().len() != value.len() {
            return Err(DomainError::invalid_id(
                "DivisionId: must not have leading or trailing whitespace",
            ));
        }
        Ok(Self(value))
    }

    /// Division id from a compile-time constant.
    ///
    /// Callers guarantee `value` is non-blank and unpadded.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for DivisionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DivisionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.to_string())
    }
}

impl TryFrom<String> for DivisionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DivisionId> for String {
    fn from(value: DivisionId) -> Self {
        value.0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_id_round_trips_through_display() {
        let id = PrincipalId::new();
        let parsed: PrincipalId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn principal_id_rejects_garbage() {
        let err = "not-a-uuid".parse::<PrincipalId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("PrincipalId")));
    }

    #[test]
    fn padded_division_id_is_rejected() {
        for raw in ["  fin ", " fin", "fin\t"] {
            let err = raw.parse::<DivisionId>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(msg) if msg.contains("whitespace")), "{raw:?}");
        }
        assert_eq!("fin".parse::<DivisionId>().unwrap(), DivisionId::from_static("fin"));
    }

    #[test]
    fn blank_division_id_is_rejected() {
        assert!("".parse::<DivisionId>().is_err());
        assert!("   ".parse::<DivisionId>().is_err());
    }

    #[test]
    fn division_id_deserialization_validates() {
        let ok: DivisionId = serde_json::from_str("\"hr\"").unwrap();
        assert_eq!(ok.as_str(), "hr");
        assert!(serde_json::from_str::<DivisionId>("\"\"").is_err());
        assert!(serde_json::from_str::<DivisionId>("\" fin\"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"hr\"");
    }
}
