//! TinyURL adapter.
//!
//! `/api-create.php` answers with the bare short URL. The POST form is tried
//! first; when it fails or returns something unusable the same endpoint is
//! called with a GET query string.

use crate::domain::errors::ProviderError;
use crate::domain::providers::ShortenProvider;
use crate::infrastructure::http::RequestClient;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, REFERER};

const NAME: &str = "TinyURL";
const HOST: &str = "tinyurl.com";

pub struct TinyUrlProvider {
    base_url: String,
    client: RequestClient,
}

impl TinyUrlProvider {
    pub fn new(client: RequestClient, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api-create.php", self.base_url.trim_end_matches('/'))
    }

    fn referer(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// POST attempt. `Ok(None)` means the upstream answered but not with a
    /// TinyURL link.
    async fn shorten_via_post(&self, url: &str) -> Result<Option<String>, ProviderError> {
        let request = self
            .client
            .client()
            .post(self.endpoint())
            .header(ACCEPT, "text/plain")
            .header(REFERER, self.referer())
            .form(&[("url", url)]);

        let response = self.client.send(request).await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::invalid_response(NAME, e.to_string()))?;

        Ok(is_tinyurl(&text).then(|| text.trim().to_string()))
    }

    async fn shorten_via_get(&self, url: &str) -> Result<String, ProviderError> {
        let request = self
            .client
            .client()
            .get(self.endpoint())
            .query(&[("url", url)])
            .header(ACCEPT, "text/plain")
            .header(REFERER, self.referer());

        let response = self.client.send(request).await?;
        if !response.status().is_success() {
            return Err(ProviderError::status(NAME, response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::invalid_response(NAME, e.to_string()))?;

        if is_tinyurl(&text) {
            Ok(text.trim().to_string())
        } else if text.to_lowercase().contains("error") {
            Err(ProviderError::upstream(NAME, text))
        } else {
            Err(ProviderError::invalid_response(NAME, text))
        }
    }
}

fn is_tinyurl(text: &str) -> bool {
    text.starts_with("http") && text.contains(HOST)
}

#[async_trait]
impl ShortenProvider for TinyUrlProvider {
    async fn shorten(&self, url: &str) -> Result<String, ProviderError> {
        match self.shorten_via_post(url).await {
            Ok(Some(short)) => return Ok(short),
            Ok(None) => tracing::debug!("TinyURL POST gave no usable link, trying GET"),
            Err(e) => tracing::warn!(error = %e, "TinyURL POST failed, trying GET"),
        }

        self.shorten_via_get(url).await
    }
}
