//! DTOs for the shorten endpoint.

use crate::domain::entities::{LinkType, ShortenOutcome};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// `url` and `service` are optional at the serde level so that a missing
/// field is reported as a validation error rather than a malformed body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// URL to shorten; a missing scheme is filled in as `https://`.
    #[validate(required, length(min = 1))]
    pub url: Option<String>,

    /// Preferred provider id, e.g. `is.gd` or `Bit.ly` (case-insensitive).
    #[validate(required, length(min = 1))]
    pub service: Option<String>,

    pub link_type: Option<LinkType>,
}

/// Shorten result.
///
/// `error` is only present on the emergency placeholder returned for an
/// unreadable request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub shortened_url: String,
    pub original_url: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    pub is_demo: bool,
    pub concealed_link: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShortenResponse {
    pub fn new(outcome: ShortenOutcome, concealed_link: String) -> Self {
        Self {
            shortened_url: outcome.shortened_url,
            original_url: outcome.original_url,
            service: outcome.service,
            link_type: outcome.link_type,
            is_demo: outcome.is_demo,
            concealed_link,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
