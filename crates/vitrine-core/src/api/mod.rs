//! HTTP API for the agency site
//!
//! Three routes: contact form submission, the service catalog and a health
//! probe. Every route answers with JSON and carries permissive CORS headers
//! so the static site can call it cross-origin.

mod handlers;
mod middleware;
mod protocol;
mod server;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::contact::ContactStore;

pub use middleware::REQUEST_ID_HEADER;
pub use protocol::*;
pub use server::ApiServer;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<ContactStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<ContactStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    let origin = state.config.allow_origin.as_str();

    let contact = post(handlers::submit_contact)
        .options(handlers::preflight)
        .fallback(handlers::contact_method_not_allowed)
        .layer(from_fn_with_state(
            middleware::CorsPolicy::new(origin, "POST, OPTIONS"),
            middleware::apply_cors,
        ));

    let services = get(handlers::list_services)
        .options(handlers::preflight)
        .fallback(handlers::services_method_not_allowed)
        .layer(from_fn_with_state(
            middleware::CorsPolicy::new(origin, "GET, OPTIONS"),
            middleware::apply_cors,
        ));

    let health = get(handlers::health)
        .options(handlers::preflight)
        .layer(from_fn_with_state(
            middleware::CorsPolicy::new(origin, "GET, OPTIONS"),
            middleware::apply_cors,
        ));

    Router::new()
        .route(routes::CONTACT, contact)
        .route(routes::SERVICES, services)
        .route(routes::HEALTH, health)
        .layer(from_fn(middleware::request_tracing))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
