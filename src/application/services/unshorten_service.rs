//! Short URL resolution.

use crate::domain::entities::UnshortenOutcome;
use crate::domain::errors::{RequestError, UnshortenError};
use crate::infrastructure::http::RequestClient;
use crate::infrastructure::resolver::ResolverApi;
use rand::seq::IndexedRandom;
use reqwest::header::LOCATION;
use url::Url;

/// Targets reported when a short URL cannot be resolved.
pub const MOCK_ORIGINAL_URLS: [&str; 3] = [
    "https://www.roblox.com/share?code=702c539cacf997468847033824ff896f&type=Server",
    "https://www.roblox.com/users/2194003353/profile",
    "https://www.roblox.com/communities/24729842/about",
];

/// Note attached to mock results.
pub const DEMO_NOTE: &str = "Demo mode - using mock original URL";

/// Resolves short URLs to their targets.
///
/// # Resolution Order
///
/// 1. `HEAD` without following redirects, reading `Location` from a 3xx
/// 2. `GET` following redirects, taking the final URL if it moved
/// 3. The third-party [`ResolverApi`]
///
/// Each step falls through to the next on any failure. Upstream calls here are
/// single attempts bounded by the request timeout.
pub struct UnshortenService {
    client: RequestClient,
    resolver: ResolverApi,
}

impl UnshortenService {
    pub fn new(client: RequestClient, resolver: ResolverApi) -> Self {
        Self { client, resolver }
    }

    /// Resolves `short_url`, substituting a mock target when every method fails.
    ///
    /// Never fails; a mock result carries [`DEMO_NOTE`].
    pub async fn unshorten(&self, short_url: &str) -> UnshortenOutcome {
        match self.resolve(short_url).await {
            Ok(original_url) => UnshortenOutcome {
                original_url,
                shortened_url: short_url.to_string(),
                note: None,
            },
            Err(e) => {
                let original_url = MOCK_ORIGINAL_URLS
                    .choose(&mut rand::rng())
                    .copied()
                    .unwrap_or(MOCK_ORIGINAL_URLS[0])
                    .to_string();

                tracing::warn!(url = %short_url, error = %e, mock = %original_url, "Unshortening failed, returning mock URL");

                UnshortenOutcome {
                    original_url,
                    shortened_url: short_url.to_string(),
                    note: Some(DEMO_NOTE.to_string()),
                }
            }
        }
    }

    /// Tries every resolution method in order.
    ///
    /// # Errors
    ///
    /// Returns [`UnshortenError::Unresolved`] when all three methods fail.
    pub async fn resolve(&self, short_url: &str) -> Result<String, UnshortenError> {
        match self.resolve_via_head(short_url).await {
            Ok(Some(target)) => {
                tracing::info!(url = %short_url, target = %target, method = "head", "Resolved short URL");
                return Ok(target);
            }
            Ok(None) => tracing::debug!(url = %short_url, "HEAD returned no redirect"),
            Err(e) => tracing::debug!(url = %short_url, error = %e, "HEAD request failed"),
        }

        match self.resolve_via_get(short_url).await {
            Ok(Some(target)) => {
                tracing::info!(url = %short_url, target = %target, method = "get", "Resolved short URL");
                return Ok(target);
            }
            Ok(None) => tracing::debug!(url = %short_url, "GET did not leave the short URL"),
            Err(e) => tracing::debug!(url = %short_url, error = %e, "GET request failed"),
        }

        match self.resolver.resolve(short_url).await {
            Ok(target) => {
                tracing::info!(url = %short_url, target = %target, method = "api", "Resolved short URL");
                Ok(target)
            }
            Err(e) => {
                tracing::debug!(url = %short_url, error = %e, "Resolver API failed");
                Err(UnshortenError::Unresolved)
            }
        }
    }

    async fn resolve_via_head(&self, short_url: &str) -> Result<Option<String>, RequestError> {
        let request = self.client.no_redirect().head(short_url);
        let response = self.client.send_with_retries(request, 0).await?;

        if !response.status().is_redirection() {
            return Ok(None);
        }

        let Some(location) = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
        else {
            return Ok(None);
        };

        Ok(Some(absolute_location(short_url, location)))
    }

    async fn resolve_via_get(&self, short_url: &str) -> Result<Option<String>, RequestError> {
        let request = self.client.client().get(short_url);
        let response = self.client.send_with_retries(request, 0).await?;

        let moved = match Url::parse(short_url) {
            Ok(input) => response.url() != &input,
            Err(_) => response.url().as_str() != short_url,
        };

        Ok(moved.then(|| response.url().to_string()))
    }
}

/// Returns `location` unchanged when absolute, otherwise joined onto `base`.
fn absolute_location(base: &str, location: &str) -> String {
    if Url::parse(location).is_ok() {
        return location.to_string();
    }

    Url::parse(base)
        .and_then(|base| base.join(location))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| location.to_string())
}
