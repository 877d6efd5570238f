//! Client for the unshorten.me resolution API.
//!
//! `GET {base}/{percent-encoded short url}` answers with
//! `{"resolved_url": ..., "success": true, ...}`.

use crate::domain::errors::{ProviderError, RequestError};
use crate::infrastructure::http::RequestClient;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use url::Url;

const NAME: &str = "unshorten.me";

/// Characters left unescaped in the path segment: alphanumerics and
/// `- _ . ! ~ * ' ( )`, the same set browsers keep in a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Deserialize)]
struct ResolveResponse {
    resolved_url: Option<String>,
}

pub struct ResolverApi {
    base_url: String,
    client: RequestClient,
}

impl ResolverApi {
    pub fn new(client: RequestClient, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Builds the lookup URL with `short_url` as a single encoded path segment.
    pub fn lookup_url(&self, short_url: &str) -> Result<Url, RequestError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| RequestError::InvalidRequest(format!("resolver base URL: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(RequestError::InvalidRequest(
                "resolver base URL cannot be a base".into(),
            ));
        }

        let segment = utf8_percent_encode(short_url, URI_COMPONENT);
        let lookup = format!("{}/{segment}", base.as_str().trim_end_matches('/'));

        Url::parse(&lookup).map_err(|e| RequestError::InvalidRequest(format!("lookup URL: {e}")))
    }

    /// Asks the API for the target of `short_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the API is unreachable, answers with a
    /// non-success status, or omits `resolved_url`.
    pub async fn resolve(&self, short_url: &str) -> Result<String, ProviderError> {
        let url = self.lookup_url(short_url)?;
        let request = self.client.client().get(url);

        let response = self.client.send_with_retries(request, 0).await?;
        if !response.status().is_success() {
            return Err(ProviderError::status(NAME, response.status()));
        }

        let data: ResolveResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(NAME, e.to_string()))?;

        data.resolved_url
            .ok_or_else(|| ProviderError::invalid_response(NAME, "missing resolved_url"))
    }
}
