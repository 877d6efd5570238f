//! DTOs for the unshorten endpoint.

use crate::domain::entities::UnshortenOutcome;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UnshortenRequest {
    /// Short URL to resolve.
    #[validate(required, length(min = 1))]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnshortenResponse {
    pub original_url: String,
    pub shortened_url: String,

    /// Present only when `original_url` is a mock value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<UnshortenOutcome> for UnshortenResponse {
    fn from(outcome: UnshortenOutcome) -> Self {
        Self {
            original_url: outcome.original_url,
            shortened_url: outcome.shortened_url,
            note: outcome.note,
        }
    }
}
