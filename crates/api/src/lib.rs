//! HTTP API: portal views, session resolution, and access gating.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;
