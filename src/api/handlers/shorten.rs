//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::ShortenService;
use crate::domain::entities::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::concealed_link::concealed_link;

const EMERGENCY_ERROR: &str = "All services unavailable";

/// Shortens a URL through the first provider that succeeds.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "www.roblox.com/users/1/profile",
///   "service": "is.gd",
///   "linkType": "profile"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortenedUrl": "https://is.gd/AbC123",
///   "originalUrl": "https://www.roblox.com/users/1/profile",
///   "service": "is.gd",
///   "linkType": "profile",
///   "isDemo": false,
///   "concealedLink": "[https_:_//www.roblox.com/users/4821/profile](https://is.gd/AbC123)"
/// }
/// ```
///
/// When every provider fails the response is still `200 OK`, with
/// `"isDemo": true` and a synthetic `https://short.ly/...` link. A body that
/// cannot be parsed at all yields a `demo.ly` placeholder with an `error` field.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` or `service` is missing, or `url` is not a
/// valid URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Unreadable shorten request, returning emergency placeholder");
            let outcome = ShortenService::emergency_outcome();
            let input_url = outcome.original_url.clone();
            return Ok(Json(
                to_response(outcome, &input_url).with_error(EMERGENCY_ERROR),
            ));
        }
    };

    payload
        .validate()
        .map_err(|_| AppError::bad_request("URL and service are required"))?;

    let (Some(url), Some(service)) = (payload.url, payload.service) else {
        return Err(AppError::bad_request("URL and service are required"));
    };

    let outcome = state
        .shorten_service
        .shorten(&url, &service, payload.link_type)
        .await?;

    Ok(Json(to_response(outcome, &url)))
}

/// `input_url` is the URL as submitted, before normalization.
fn to_response(outcome: ShortenOutcome, input_url: &str) -> ShortenResponse {
    let concealed = concealed_link(outcome.link_type, input_url, &outcome.shortened_url);
    ShortenResponse::new(outcome, concealed)
}
