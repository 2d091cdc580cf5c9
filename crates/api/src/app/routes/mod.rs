use axum::{Router, routing::get};

pub mod access;
pub mod admin;
pub mod divisions;
pub mod system;

/// Router for all session-aware portal endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/login", get(system::login))
        .route("/unauthorized", get(system::unauthorized))
        .route("/dashboard", get(system::dashboard))
        .route("/whoami", get(system::whoami))
        .nest("/divisions", divisions::router())
        .nest("/access", access::router())
        .nest("/admin", admin::router())
}
