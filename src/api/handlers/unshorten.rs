//! Handler for the unshorten endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::unshorten::{UnshortenRequest, UnshortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short URL to its target.
///
/// # Endpoint
///
/// `POST /api/unshorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://is.gd/AbC123" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://www.roblox.com/users/1/profile",
///   "shortenedUrl": "https://is.gd/AbC123"
/// }
/// ```
///
/// If the URL cannot be resolved, `originalUrl` is a mock value and a `note`
/// field says so.
///
/// # Errors
///
/// Returns 400 Bad Request for an unreadable body or a missing `url`.
pub async fn unshorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<UnshortenRequest>, JsonRejection>,
) -> Result<Json<UnshortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Unreadable unshorten request");
        AppError::bad_request("Invalid request body")
    })?;

    payload
        .validate()
        .map_err(|_| AppError::bad_request("URL is required"))?;

    let Some(url) = payload.url else {
        return Err(AppError::bad_request("URL is required"));
    };

    let outcome = state.unshorten_service.unshorten(&url).await;

    Ok(Json(outcome.into()))
}
