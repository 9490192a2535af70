//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`      - Slug redirect
//! - `GET  /health`      - Health check: store and cache
//! - `POST /api/links`   - Create a link
//!
//! Requests with a method a route does not accept get 405 Method Not Allowed.
//! Every route is wrapped in the request tracing layer.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}
