//! Adapters for the JSON-bodied shorteners, t.ly and short.io.
//!
//! Neither is reliable without an account, so the catalog always wraps them in
//! [`super::WithFallback`].

use crate::domain::errors::ProviderError;
use crate::domain::providers::ShortenProvider;
use crate::infrastructure::http::RequestClient;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct TlyRequest<'a> {
    long_url: &'a str,
}

#[derive(Deserialize)]
struct TlyResponse {
    short_url: Option<String>,
}

#[derive(Serialize)]
struct ShortIoRequest<'a> {
    #[serde(rename = "originalURL")]
    original_url: &'a str,
    domain: &'a str,
}

#[derive(Deserialize)]
struct ShortIoResponse {
    #[serde(rename = "shortURL")]
    short_url: Option<String>,
}

/// t.ly: `POST /api/v1/link/shorten` with `{"long_url"}`, answers `short_url`.
pub struct TlyProvider {
    base_url: String,
    client: RequestClient,
}

impl TlyProvider {
    const NAME: &'static str = "t.ly";

    pub fn new(client: RequestClient, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl ShortenProvider for TlyProvider {
    async fn shorten(&self, url: &str) -> Result<String, ProviderError> {
        let request = self
            .client
            .client()
            .post(format!(
                "{}/api/v1/link/shorten",
                self.base_url.trim_end_matches('/')
            ))
            .header(ACCEPT, "application/json")
            .json(&TlyRequest { long_url: url });

        let response = self.client.send(request).await?;
        if !response.status().is_success() {
            return Err(ProviderError::status(Self::NAME, response.status()));
        }

        let data: TlyResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(Self::NAME, e.to_string()))?;

        data.short_url
            .ok_or_else(|| ProviderError::invalid_response(Self::NAME, "missing short_url"))
    }
}

/// short.io: `POST /links` with `{"originalURL", "domain"}`, answers `shortURL`.
pub struct ShortIoProvider {
    base_url: String,
    client: RequestClient,
}

impl ShortIoProvider {
    const NAME: &'static str = "ShortLink";
    const DOMAIN: &'static str = "short.io";

    pub fn new(client: RequestClient, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl ShortenProvider for ShortIoProvider {
    async fn shorten(&self, url: &str) -> Result<String, ProviderError> {
        let request = self
            .client
            .client()
            .post(format!("{}/links", self.base_url.trim_end_matches('/')))
            .header(ACCEPT, "application/json")
            .json(&ShortIoRequest {
                original_url: url,
                domain: Self::DOMAIN,
            });

        let response = self.client.send(request).await?;
        if !response.status().is_success() {
            return Err(ProviderError::status(Self::NAME, response.status()));
        }

        let data: ShortIoResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(Self::NAME, e.to_string()))?;

        data.short_url
            .ok_or_else(|| ProviderError::invalid_response(Self::NAME, "missing shortURL"))
    }
}
