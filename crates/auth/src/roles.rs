use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role a principal holds inside one division (e.g. "manager", "member").
///
/// Roles are free-form tags assigned in the hosted data store; this layer
/// compares them by exact string value and attaches no meaning to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
