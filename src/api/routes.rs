//! API route configuration.

use crate::api::handlers::{providers_handler, shorten_handler, unshorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `POST /shorten`   - Shorten a URL via the provider fallback chain
/// - `POST /unshorten` - Resolve a short URL
/// - `GET  /providers` - List selectable services
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/unshorten", post(unshorten_handler))
        .route("/providers", get(providers_handler))
}
