//! Handler listing the selectable shortening services.

use axum::{Json, extract::State};

use crate::api::dto::providers::ProvidersResponse;
use crate::domain::providers::SELECTABLE_PROVIDERS;
use crate::state::AppState;

/// Lists the services a client may pass as `service`.
///
/// # Endpoint
///
/// `GET /api/providers`
///
/// # Response
///
/// ```json
/// {
///   "providers": [
///     { "id": "is.gd", "name": "is.gd", "recommended": true, "description": "Lightning fast & reliable" }
///   ]
/// }
/// ```
pub async fn providers_handler(State(state): State<AppState>) -> Json<ProvidersResponse> {
    let catalog = state.shorten_service.catalog();

    let providers = SELECTABLE_PROVIDERS
        .iter()
        .filter(|info| catalog.contains(info.id))
        .copied()
        .collect();

    Json(ProvidersResponse { providers })
}
