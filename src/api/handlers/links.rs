//! Handler for link creation.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a link for a URL and returns its slug.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com" }
/// ```
///
/// The body is decoded as JSON whatever `Content-Type` the client sends.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "url": "http://example.com", "slug": "1" }
/// ```
///
/// Submitting the same URL again creates a second link with its own slug.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is empty or does not decode to a request.
/// Returns 500 Internal Server Error if the link could not be stored.
pub async fn create_link_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    if body.is_empty() {
        return Err(AppError::bad_request(
            "Invalid request body",
            json!({ "reason": "request body is empty" }),
        ));
    }

    let payload: CreateLinkRequest = serde_json::from_slice(&body).map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
    })?;

    let link = state.link_service.create(payload.url.trim()).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
