//! Results produced by the shorten and unshorten services.

use super::LinkType;

/// Display name recorded when no real provider succeeded.
pub const DEMO_SERVICE_NAME: &str = "Demo Mode";

/// Outcome of a shorten request.
///
/// Either `shortened_url` starts with `http` and is longer than 10 characters,
/// or `is_demo` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub shortened_url: String,
    pub original_url: String,
    /// Display name of the provider that actually produced the URL.
    pub service: String,
    pub link_type: Option<LinkType>,
    pub is_demo: bool,
}

impl ShortenOutcome {
    pub fn new(
        shortened_url: String,
        original_url: String,
        service: String,
        link_type: Option<LinkType>,
    ) -> Self {
        Self {
            shortened_url,
            original_url,
            service,
            link_type,
            is_demo: false,
        }
    }

    pub fn demo(shortened_url: String, original_url: String, link_type: Option<LinkType>) -> Self {
        Self {
            shortened_url,
            original_url,
            service: DEMO_SERVICE_NAME.to_string(),
            link_type,
            is_demo: true,
        }
    }
}

/// Outcome of an unshorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnshortenOutcome {
    pub original_url: String,
    pub shortened_url: String,
    /// Set only when the original URL is a mock value.
    pub note: Option<String>,
}
