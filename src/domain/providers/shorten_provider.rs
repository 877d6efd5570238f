//! Capability interface shared by every shortening adapter.

use crate::domain::errors::ProviderError;
use async_trait::async_trait;

/// An integration against one external URL-shortening API.
///
/// Implementations take an already-normalized URL and return the short URL
/// exactly as the upstream reported it. Plausibility of the returned value is
/// judged by the caller, not the adapter.
///
/// # Implementations
///
/// - [`crate::infrastructure::providers::GdProvider`] - is.gd and v.gd
/// - [`crate::infrastructure::providers::TinyUrlProvider`] - TinyURL (POST, then GET)
/// - [`crate::infrastructure::providers::CleanUriProvider`] - CleanURI
/// - [`crate::infrastructure::providers::WithFallback`] - t.ly and short.io with a backup provider
/// - Test mocks available with `cfg(test)`
///
/// Brand aliases reuse another provider's `Arc` under their own display name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenProvider: Send + Sync {
    /// Shortens `url` through this provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the upstream is unreachable, answers with
    /// a non-success status, or the response does not match its contract.
    async fn shorten(&self, url: &str) -> Result<String, ProviderError>;
}
