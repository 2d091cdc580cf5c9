//! HTTP API application wiring (Axum router + session resolution).
//!
//! - `routes/`: HTTP routes + handlers (one file per portal area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(session_secret: String) -> Router {
    let validator = Arc::new(portal_auth::Hs256SessionValidator::new(session_secret.into_bytes()));
    let session_state = middleware::SessionState { validator };

    // Portal routes: the session is always resolved, gating happens per handler.
    let portal = routes::router().layer(axum::middleware::from_fn_with_state(
        session_state,
        middleware::session_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(portal)
        .layer(ServiceBuilder::new())
}
