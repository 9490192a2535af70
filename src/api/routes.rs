//! API route configuration.

use crate::api::handlers::create_link_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /links` - Create a link and mint its slug
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/links", post(create_link_handler))
}
