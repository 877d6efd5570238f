//! Adapter combinator that retries through a backup provider.

use crate::domain::errors::ProviderError;
use crate::domain::providers::ShortenProvider;
use async_trait::async_trait;
use std::sync::Arc;

/// Calls `primary`; on any failure delegates the same URL to `fallback`.
///
/// The fallback's error, not the primary's, is what the caller sees when both
/// fail.
pub struct WithFallback {
    name: &'static str,
    primary: Arc<dyn ShortenProvider>,
    fallback: Arc<dyn ShortenProvider>,
}

impl WithFallback {
    pub fn new(
        name: &'static str,
        primary: Arc<dyn ShortenProvider>,
        fallback: Arc<dyn ShortenProvider>,
    ) -> Self {
        Self {
            name,
            primary,
            fallback,
        }
    }
}

#[async_trait]
impl ShortenProvider for WithFallback {
    async fn shorten(&self, url: &str) -> Result<String, ProviderError> {
        match self.primary.shorten(url).await {
            Ok(short) => Ok(short),
            Err(e) => {
                tracing::warn!(provider = self.name, error = %e, "Primary request failed, using backup provider");
                self.fallback.shorten(url).await
            }
        }
    }
}
