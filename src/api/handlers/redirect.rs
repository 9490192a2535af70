//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Look the slug up in the cache
/// 2. On a miss, decode it and query the store
/// 3. Populate the cache with the result
/// 4. Return 308 Permanent Redirect
///
/// # Errors
///
/// Returns 400 Bad Request if the slug contains illegal characters.
/// Returns 404 Not Found if no link backs the slug.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.link_service.get(&slug).await?;

    let location = HeaderValue::from_str(&url).map_err(|e| {
        error!(slug = %slug, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be redirected to", json!({ "slug": slug }))
    })?;

    Ok((StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]).into_response())
}
