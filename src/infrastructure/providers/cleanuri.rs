//! CleanURI adapter: form POST to `/api/v1/shorten`, short link in `result_url`.

use crate::domain::errors::ProviderError;
use crate::domain::providers::ShortenProvider;
use crate::infrastructure::http::RequestClient;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

const NAME: &str = "CleanURI";

#[derive(Debug, Deserialize)]
struct CleanUriResponse {
    result_url: Option<String>,
}

pub struct CleanUriProvider {
    base_url: String,
    client: RequestClient,
}

impl CleanUriProvider {
    pub fn new(client: RequestClient, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl ShortenProvider for CleanUriProvider {
    async fn shorten(&self, url: &str) -> Result<String, ProviderError> {
        let request = self
            .client
            .client()
            .post(format!(
                "{}/api/v1/shorten",
                self.base_url.trim_end_matches('/')
            ))
            .header(ACCEPT, "application/json")
            .form(&[("url", url)]);

        let response = self.client.send(request).await?;
        if !response.status().is_success() {
            return Err(ProviderError::status(NAME, response.status()));
        }

        let data: CleanUriResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(NAME, e.to_string()))?;

        data.result_url
            .ok_or_else(|| ProviderError::invalid_response(NAME, "missing result_url"))
    }
}
