//! `portal-core` — identifiers and small shared building blocks for the portal.
//!
//! This crate contains **pure** primitives (no HTTP, no storage, no identity provider).

pub mod error;
pub mod id;
pub mod time;

pub use error::DomainError;
pub use id::{DivisionId, PrincipalId};
pub use time::relative_time;
