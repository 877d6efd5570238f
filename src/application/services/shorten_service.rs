//! Provider fallback chain for shortening.

use crate::domain::entities::{LinkType, ShortenOutcome};
use crate::domain::providers::{ProviderCatalog, provider_order};
use crate::error::AppError;
use crate::utils::code_generator::demo_short_url;
use crate::utils::url_normalizer::normalize_url;

/// Domain of the placeholder link returned when the request itself is broken.
pub const EMERGENCY_DOMAIN: &str = "demo.ly";
/// Original URL reported alongside the emergency placeholder.
pub const EMERGENCY_ORIGINAL_URL: &str = "https://example.com";

/// Returns true if `short_url` looks like something a provider really issued.
pub fn is_plausible_short_url(short_url: &str) -> bool {
    short_url.starts_with("http") && short_url.len() > 10
}

/// Shortens URLs by walking providers in priority order.
///
/// The first provider returning a plausible URL wins. When none does, the
/// result is a synthetic demo link; provider failures never reach the caller.
pub struct ShortenService {
    catalog: ProviderCatalog,
    demo_domain: String,
}

impl ShortenService {
    pub fn new(catalog: ProviderCatalog, demo_domain: impl Into<String>) -> Self {
        Self {
            catalog,
            demo_domain: demo_domain.into(),
        }
    }

    pub fn catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    /// Shortens `url`, preferring the provider named by `service`.
    ///
    /// # Provider Order
    ///
    /// `service` (lower-cased) first, then [`crate::domain::providers::FALLBACK_ORDER`],
    /// without duplicates. Ids missing from the catalog are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` cannot be normalized. Provider
    /// failures are logged and never returned.
    pub async fn shorten(
        &self,
        url: &str,
        service: &str,
        link_type: Option<LinkType>,
    ) -> Result<ShortenOutcome, AppError> {
        let original_url = normalize_url(url).map_err(|e| {
            tracing::debug!(error = %e, "Rejected input URL");
            AppError::bad_request("Invalid URL format")
        })?;

        for id in provider_order(service) {
            let Some(entry) = self.catalog.get(&id) else {
                tracing::debug!(provider = %id, "Unknown provider, skipping");
                continue;
            };

            tracing::debug!(provider = %id, url = %original_url, "Trying provider");

            match entry.provider.shorten(&original_url).await {
                Ok(short_url) if is_plausible_short_url(&short_url) => {
                    tracing::info!(
                        provider = %id,
                        service = %entry.display_name,
                        short_url = %short_url,
                        "Shortened URL"
                    );
                    return Ok(ShortenOutcome::new(
                        short_url,
                        original_url,
                        entry.display_name.clone(),
                        link_type,
                    ));
                }
                Ok(short_url) => {
                    tracing::warn!(provider = %id, response = %short_url, "Implausible short URL");
                }
                Err(e) => {
                    tracing::warn!(provider = %id, error = %e, "Provider failed");
                }
            }
        }

        let shortened_url = demo_short_url(&self.demo_domain);
        tracing::warn!(url = %original_url, demo = %shortened_url, "All providers failed, returning demo link");

        Ok(ShortenOutcome::demo(shortened_url, original_url, link_type))
    }

    /// Placeholder result for requests that could not even be read.
    pub fn emergency_outcome() -> ShortenOutcome {
        ShortenOutcome::demo(
            demo_short_url(EMERGENCY_DOMAIN),
            EMERGENCY_ORIGINAL_URL.to_string(),
            Some(LinkType::Profile),
        )
    }
}
