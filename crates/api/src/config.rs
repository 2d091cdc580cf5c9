//! Process configuration, read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "PORTAL_BIND_ADDR";
pub const SESSION_SECRET_ENV: &str = "JWT_SECRET";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEV_SESSION_SECRET: &str = "dev-secret";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub bind_addr: SocketAddr,
    /// Shared secret used to verify HS256 session tokens.
    pub session_secret: String,
}

impl core::fmt::Debug for PortalConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PortalConfig")
            .field("bind_addr", &self.bind_addr)
            .field("session_secret", &"<redacted>")
            .finish()
    }
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: raw_addr.clone(),
            })?;

        let session_secret = match lookup(SESSION_SECRET_ENV) {
            Some(secret) if secret.is_empty() => return Err(ConfigError::Empty(SESSION_SECRET_ENV)),
            Some(secret) => secret,
            None => {
                tracing::warn!("{SESSION_SECRET_ENV} not set; using insecure dev default");
                DEV_SESSION_SECRET.to_string()
            }
        };

        Ok(Self {
            bind_addr,
            session_secret,
        })
    }
}
